//! Taskly Frontend App
//!
//! Top-level router: public auth pages, private dashboard, toast overlay.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Dashboard, LoginForm, PublicOnly, RegisterForm, RequireAuth, Toaster};
use crate::session::Session;
use crate::toast::ToastContext;

#[component]
pub fn App() -> impl IntoView {
    // Session and toasts are app-wide; the dashboard store is per-view
    provide_context(Session::restore());
    provide_context(ToastContext::new());

    view! {
        <Router>
            <Toaster/>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Not found."</p> }>
                    <Route path=path!("/") view=|| view! { <PublicOnly><RegisterForm/></PublicOnly> }/>
                    <Route path=path!("/login") view=|| view! { <PublicOnly><LoginForm/></PublicOnly> }/>
                    <Route path=path!("/dashboard") view=|| view! { <RequireAuth><Dashboard/></RequireAuth> }/>
                </Routes>
            </main>
        </Router>
    }
}
