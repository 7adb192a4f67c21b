//! Task Form Component
//!
//! Form for creating new tasks. On success the created task is patched into
//! the local list and mirrored onto the live channel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_socket::SocketClient;
use wasm_bindgen::JsCast;

use crate::api;
use crate::live;
use crate::store::{store_upsert_task, use_dash_store};
use crate::toast::use_toast;
use crate::validate::validate_title;

#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_dash_store();
    let toast = use_toast();
    let socket = expect_context::<SocketClient>();

    let (title, set_title) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if validate_title(&text).is_err() || busy.get() {
            return;
        }
        set_busy.set(true);
        let socket = socket.clone();
        spawn_local(async move {
            match api::create_task(text.trim()).await {
                Ok(resp) if resp.success => {
                    if let Some(task) = resp.task {
                        store_upsert_task(&store, task.clone());
                        socket.emit(live::TASK_CREATED, live::task_payload(&task));
                    }
                    toast.success("Task created successfully");
                    set_title.try_set(String::new());
                }
                Ok(resp) => toast.error(
                    resp.message
                        .unwrap_or_else(|| "Failed to create task".to_string()),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] create failed: {}", e).into());
                    toast.error("Failed to create task. Please try again.");
                }
            }
            set_busy.try_set(false);
        });
    };

    view! {
        <form class="task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit" disabled=move || busy.get()>"Add"</button>
        </form>
    }
}
