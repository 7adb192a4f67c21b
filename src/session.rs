//! Session Store
//!
//! The authenticated user's identity plus bearer credential, persisted to
//! local storage and provided to components via Leptos context. Presence of
//! a stored identity is treated as authenticated; no expiry check.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::models::User;

/// Local storage key for the bearer credential
pub const TOKEN_KEY: &str = "userToken";
/// Local storage key for the serialized user identity
pub const USER_KEY: &str = "userInfo";

/// Session context with read/update/clear operations
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<User>>,
}

impl Session {
    /// Rehydrate the session from local storage on boot
    pub fn restore() -> Self {
        let user = LocalStorage::get::<User>(USER_KEY).ok();
        Self {
            user: RwSignal::new(user),
        }
    }

    /// Current user identity, reactive
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Whether a user is signed in, reactive (route guards track this)
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Persist identity and credential, then publish the identity
    pub fn login(&self, user: User, token: &str) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
            web_sys::console::warn_1(&format!("[SESSION] token not persisted: {}", e).into());
        }
        if let Err(e) = LocalStorage::set(USER_KEY, &user) {
            web_sys::console::warn_1(&format!("[SESSION] user not persisted: {}", e).into());
        }
        self.user.set(Some(user));
    }

    /// Drop both persisted keys and the in-memory identity
    pub fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        self.user.set(None);
    }

    /// Bearer credential, read fresh from local storage at call time
    ///
    /// The API client calls this per request; `None` means the request goes
    /// out without an Authorization header.
    pub fn token() -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY).ok()
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}
