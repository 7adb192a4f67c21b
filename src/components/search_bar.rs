//! Search Bar Component
//!
//! The input filters the local list as the user types. Submitting runs the
//! server-side search and overwrites the local list with the results; a
//! blank submit refetches the full list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::store::{store_set_tasks, use_dash_store, DashStateStoreFields};
use crate::toast::use_toast;

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_dash_store();
    let toast = use_toast();
    let (searching, set_searching) = signal(false);

    let run_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if searching.get() {
            return;
        }
        let text = store.query().get().trim().to_string();
        set_searching.set(true);
        spawn_local(async move {
            let result = if text.is_empty() {
                api::get_tasks().await
            } else {
                api::search_tasks(&text).await
            };
            match result {
                Ok(resp) => store_set_tasks(&store, resp.tasks),
                Err(e) => {
                    web_sys::console::error_1(&format!("[SEARCH] {}", e).into());
                    toast.error("Search failed. Please try again.");
                }
            }
            set_searching.try_set(false);
        });
    };

    view! {
        <form class="search-bar" on:submit=run_search>
            <input
                type="search"
                placeholder="Search tasks..."
                prop:value=move || store.query().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.query().set(input.value());
                }
            />
            <button type="submit" disabled=move || searching.get()>"Search"</button>
        </form>
    }
}
