//! Dashboard Component
//!
//! Composes the task list, search, filter, chart and the live-update
//! channel. Owns the authoritative in-memory task collection for the
//! lifetime of the view: fetched in full on mount, patched incrementally by
//! local mutations and by events from other sessions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_socket::{ChannelState, SocketClient};
use reactive_stores::Store;

use crate::api;
use crate::config;
use crate::filter::visible_tasks;
use crate::live;
use crate::session::{use_session, Session};
use crate::store::{
    store_remove_task, store_set_tasks, store_upsert_task, DashState, DashStateStoreFields,
};
use crate::toast::use_toast;

use super::{FilterBar, SearchBar, StatusChart, TaskForm, TaskList};

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let store = Store::new(DashState::default());
    provide_context(store);

    // One channel per dashboard view, credential in the handshake
    let socket = SocketClient::new(config::socket_endpoint(Session::token().as_deref()));
    provide_context(socket.clone());
    socket.connect();
    if let Some(user) = session.user() {
        socket.emit(live::JOIN, serde_json::json!(user.id));
    }

    // Remote patches: created/updated/completed replace-by-id, deleted removes
    let subs = vec![
        socket.on(live::TASK_CREATED, move |data| {
            if let Some(task) = live::event_task(data) {
                store_upsert_task(&store, task);
            }
        }),
        socket.on(live::TASK_UPDATED, move |data| {
            if let Some(task) = live::event_task(data) {
                store_upsert_task(&store, task);
            }
        }),
        socket.on(live::TASK_COMPLETED, move |data| {
            if let Some(task) = live::event_task(data) {
                store_upsert_task(&store, task);
            }
        }),
        socket.on(live::TASK_DELETED, move |data| {
            if let Some(id) = live::event_task_id(&data) {
                store_remove_task(&store, &id);
            }
        }),
    ];

    let (loading, set_loading) = signal(true);
    spawn_local(async move {
        match api::get_tasks().await {
            Ok(resp) => {
                web_sys::console::log_1(&format!("[DASH] loaded {} tasks", resp.tasks.len()).into());
                store_set_tasks(&store, resp.tasks);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[DASH] fetch failed: {}", e).into());
                toast.error("Failed to load tasks");
            }
        }
        set_loading.try_set(false);
    });

    {
        let socket = socket.clone();
        on_cleanup(move || {
            for sub in subs {
                socket.off(sub);
            }
            socket.close();
        });
    }

    let channel_state = socket.state();
    let username = session.user().map(|u| u.username).unwrap_or_default();

    let visible = Memo::new(move |_| {
        let tasks = store.tasks().get();
        visible_tasks(&tasks, store.filter().get(), &store.query().get())
    });

    let on_logout = move |_: web_sys::MouseEvent| {
        let navigate = navigate.clone();
        spawn_local(async move {
            // The local session ends whatever the backend answers
            if let Err(e) = api::logout().await {
                web_sys::console::warn_1(&format!("[DASH] logout: {}", e).into());
            }
            session.clear();
            navigate("/login", Default::default());
        });
    };

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <h1>"Your Tasks"</h1>
                <div class="dash-user">
                    <span class=move || {
                        if channel_state.get() == ChannelState::Connected {
                            "live-badge on"
                        } else {
                            "live-badge"
                        }
                    }>
                        {move || match channel_state.get() {
                            ChannelState::Connected => "live",
                            ChannelState::Connecting => "connecting",
                            ChannelState::Disconnected => "offline",
                        }}
                    </span>
                    <span class="user-name">{username}</span>
                    <button class="logout-btn" on:click=on_logout>"Logout"</button>
                </div>
            </header>

            <section class="dash-controls">
                <TaskForm/>
                <SearchBar/>
                <FilterBar/>
            </section>

            <section class="dash-body">
                <TaskList tasks=visible loading=loading/>
                <StatusChart/>
            </section>
        </div>
    }
}
