//! Task List Component
//!
//! Renders the visible tasks. Keyed on (id, title, status) so a row is
//! rebuilt when a live event or local patch changes its content.

use leptos::prelude::*;

use crate::models::Task;

use super::TaskItem;

#[component]
pub fn TaskList(tasks: Memo<Vec<Task>>, loading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Loading..."</div>
        </Show>
        <Show when=move || !loading.get() && tasks.get().is_empty()>
            <p class="empty-list">"No tasks to show."</p>
        </Show>
        <ul class="task-list">
            <For
                each=move || tasks.get()
                key=|task| (task.id.clone(), task.title.clone(), task.status)
                children=move |task| view! { <TaskItem task=task/> }
            />
        </ul>
    }
}
