//! Register Form Component
//!
//! Username/email/password/confirm form. Fields validate on input; a
//! successful registration navigates to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::toast::use_toast;
use crate::validate::{
    validate_confirm_password, validate_email, validate_password, validate_username,
};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (username_error, set_username_error) = signal::<Option<String>>(None);
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();
        let confirm_value = confirm.get();

        let checks = [
            (validate_username(&username_value), set_username_error),
            (validate_email(&email_value), set_email_error),
            (validate_password(&password_value), set_password_error),
            (
                validate_confirm_password(&password_value, &confirm_value),
                set_confirm_error,
            ),
        ];
        let mut valid = true;
        for (check, set_error) in checks {
            valid &= check.is_ok();
            set_error.set(check.err());
        }
        if !valid || loading.get() {
            return;
        }
        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&username_value, &email_value, &password_value).await {
                Ok(resp) if resp.success => {
                    toast.success(
                        resp.message
                            .unwrap_or_else(|| "Registration successful".to_string()),
                    );
                    navigate("/login", Default::default());
                }
                Ok(resp) => toast.error(
                    resp.message
                        .unwrap_or_else(|| "Registration failed.".to_string()),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("[REGISTER] {}", e).into());
                    toast.error("Registration failed. Please try again.");
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
                            type="text"
                            placeholder="Enter username"
                            class:invalid=move || username_error.get().is_some()
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_username_error.set(validate_username(&value).err());
                                set_username.set(value);
                            }
                        />
                        {move || username_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

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

                    <div class="field">
                        <input
                            type="password"
                            placeholder="Confirm password"
                            class:invalid=move || confirm_error.get().is_some()
                            prop:value=move || confirm.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_confirm_error
                                    .set(validate_confirm_password(&password.get(), &value).err());
                                set_confirm.set(value);
                            }
                        />
                        {move || confirm_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <button type="submit" class="auth-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    <A href="/login">"Already have an account? Login here"</A>
                </p>
            </div>
        </div>
    }
}
