//! Task Item Component
//!
//! A single row in the task list: title, status, complete/edit/delete
//! actions, inline edit form. Completed tasks expose no edit affordance and
//! an edit attempt is rejected before any request is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_socket::SocketClient;
use wasm_bindgen::JsCast;

use crate::api;
use crate::live;
use crate::models::{Task, TaskStatus};
use crate::store::{store_remove_task, store_upsert_task, use_dash_store};
use crate::toast::use_toast;
use crate::validate::validate_title;

use super::DeleteConfirmButton;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_dash_store();
    let toast = use_toast();
    let socket = expect_context::<SocketClient>();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.title.clone());
    let (busy, set_busy) = signal(false);

    let completed = task.is_completed();
    let status = task.status;
    let title = task.title.clone();

    let complete_id = task.id.clone();
    let complete_socket = socket.clone();
    let on_complete = move |_: web_sys::MouseEvent| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let id = complete_id.clone();
        let socket = complete_socket.clone();
        spawn_local(async move {
            match api::complete_task(&id).await {
                Ok(resp) if resp.success => {
                    if let Some(task) = resp.task {
                        store_upsert_task(&store, task.clone());
                        socket.emit(live::TASK_COMPLETED, live::task_payload(&task));
                    }
                    toast.success("Task completed successfully");
                }
                Ok(resp) => toast.error(
                    resp.message
                        .unwrap_or_else(|| "Failed to complete task".to_string()),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] complete failed: {}", e).into());
                    toast.error("Failed to complete task. Please try again.");
                }
            }
            set_busy.try_set(false);
        });
    };

    let edit_id = task.id.clone();
    let edit_socket = socket.clone();
    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Client-enforced: completed tasks are not editable, no request goes out
        if status == TaskStatus::Completed {
            toast.error("Completed tasks cannot be edited");
            return;
        }
        let text = draft.get();
        if let Err(msg) = validate_title(&text) {
            toast.error(msg);
            return;
        }
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let id = edit_id.clone();
        let socket = edit_socket.clone();
        spawn_local(async move {
            match api::update_task(&id, text.trim(), status).await {
                Ok(resp) if resp.success => {
                    if let Some(task) = resp.task {
                        store_upsert_task(&store, task.clone());
                        socket.emit(live::TASK_UPDATED, live::task_payload(&task));
                    }
                    toast.success("Task updated successfully");
                    set_editing.try_set(false);
                }
                Ok(resp) => toast.error(
                    resp.message
                        .unwrap_or_else(|| "Failed to update task".to_string()),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] update failed: {}", e).into());
                    toast.error("Failed to update task. Please try again.");
                }
            }
            set_busy.try_set(false);
        });
    };

    let delete_id = task.id.clone();
    let delete_socket = socket.clone();
    let on_delete = Callback::new(move |_: ()| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let id = delete_id.clone();
        let socket = delete_socket.clone();
        spawn_local(async move {
            match api::delete_task(&id).await {
                Ok(resp) if resp.success => {
                    store_remove_task(&store, &id);
                    socket.emit(live::TASK_DELETED, serde_json::json!(id));
                    toast.success("Task deleted successfully");
                }
                Ok(resp) => toast.error(
                    resp.message
                        .unwrap_or_else(|| "Failed to delete task".to_string()),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] delete failed: {}", e).into());
                    toast.error("Failed to delete task. Please try again.");
                }
            }
            set_busy.try_set(false);
        });
    });

    view! {
        <li class=move || if completed { "task-row completed" } else { "task-row" }>
            {move || {
                if editing.get() {
                    let save = save_edit.clone();
                    view! {
                        <form class="edit-form" on:submit=save>
                            <input
                                type="text"
                                prop:value=move || draft.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_draft.set(input.value());
                                }
                            />
                            <button type="submit" disabled=move || busy.get()>"Save"</button>
                            <button type="button" on:click=move |_| set_editing.set(false)>
                                "Cancel"
                            </button>
                        </form>
                    }
                    .into_any()
                } else {
                    let row_title = title.clone();
                    let edit_title = title.clone();
                    let complete = on_complete.clone();
                    view! {
                        <span class="task-title">{row_title}</span>
                        <span class="task-status">{format!(" - {}", status.as_str())}</span>
                        <span class="task-actions">
                            {if !completed {
                                view! {
                                    <span class="pending-actions">
                                        <button
                                            class="complete-btn"
                                            title="Complete"
                                            disabled=move || busy.get()
                                            on:click=complete
                                        >
                                            "✓"
                                        </button>
                                        <button
                                            class="edit-btn"
                                            title="Edit"
                                            on:click=move |_| {
                                                set_draft.set(edit_title.clone());
                                                set_editing.set(true);
                                            }
                                        >
                                            "✎"
                                        </button>
                                    </span>
                                }
                                .into_any()
                            } else {
                                view! { <span class="edit-placeholder"></span> }.into_any()
                            }}
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete/>
                        </span>
                    }
                    .into_any()
                }
            }}
        </li>
    }
}
