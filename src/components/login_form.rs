//! Login Form Component
//!
//! Email/password form. Fields validate on input; a successful login opens
//! the session and navigates to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::session::use_session;
use crate::toast::use_toast;
use crate::validate::{validate_email, validate_password};

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        let email_check = validate_email(&email_value);
        let password_check = validate_password(&password_value);
        set_email_error.set(email_check.as_ref().err().cloned());
        set_password_error.set(password_check.as_ref().err().cloned());
        if email_check.is_err() || password_check.is_err() || loading.get() {
            return;
        }
        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(resp) if resp.success => match (resp.user, resp.token) {
                    (Some(user), Some(token)) => {
                        session.login(user, &token);
                        toast.success(
                            resp.message.unwrap_or_else(|| "Login successful".to_string()),
                        );
                        navigate("/dashboard", Default::default());
                    }
                    _ => toast.error("Login Error"),
                },
                Ok(resp) => {
                    toast.error(resp.message.unwrap_or_else(|| "Login Error".to_string()))
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOGIN] {}", e).into());
                    toast.error("Login failed. Please try again.");
                }
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="brand">"Task"<span class="brand-accent">"LY"</span></h1>

                <form class="auth-form" novalidate=true on:submit=submit>
                    <div class="field">
                        <input
                            type="email"
                            placeholder="Enter email"
                            class:invalid=move || email_error.get().is_some()
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_email_error.set(validate_email(&value).err());
                                set_email.set(value);
                            }
                        />
                        {move || email_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="field">
                        <input
                            type="password"
                            placeholder="Enter password"
                            class:invalid=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_password_error.set(validate_password(&value).err());
                                set_password.set(value);
                            }
                        />
                        {move || password_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <button type="submit" class="auth-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-switch">
                    <A href="/">"Don't have an account? Register here"</A>
                </p>
            </div>
        </div>
    }
}
