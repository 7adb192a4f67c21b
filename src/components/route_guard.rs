//! Route Guards
//!
//! Gate navigation between the public (register/login) and private
//! (dashboard) areas. Both guards are pure functions of session-store
//! contents; a stored identity counts as authenticated, no expiry check.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::use_session;

/// Render children only for authenticated sessions, else go to login
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}

/// Render children only for anonymous sessions, else go to the dashboard
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=|| view! { <Redirect path="/dashboard"/> }
        >
            {children()}
        </Show>
    }
}
