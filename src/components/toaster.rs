//! Toaster Component
//!
//! Renders the transient notification stack top-center.

use leptos::prelude::*;

use crate::toast::{use_toast, ToastLevel};

#[component]
pub fn Toaster() -> impl IntoView {
    let toast = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || toast.toasts().get()
                key=|t| t.id
                children=move |t| {
                    let class = match t.level {
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    };
                    view! { <div class=class>{t.message.clone()}</div> }
                }
            />
        </div>
    }
}
