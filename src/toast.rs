//! Transient Notifications
//!
//! Context-provided toast stack; every toast dismisses itself after a few
//! seconds. Rendered by `components::Toaster`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Live toast stack, for the Toaster component
    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

/// Get the toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
