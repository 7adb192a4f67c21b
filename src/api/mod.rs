//! Backend API Client
//!
//! One async fn per backend operation, organized by domain. Each issues a
//! single HTTP request against the configured origin, attaches the bearer
//! credential read fresh from the session store, and returns the parsed
//! response body. Transport failures and non-2xx statuses propagate to the
//! caller as `Err(String)`; there is no retry and no explicit timeout.

mod auth;
mod task;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config;
use crate::session::Session;

// Re-export all public items
pub use auth::*;
pub use task::*;

fn url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Attach `Authorization: Bearer <token>` when a credential is stored.
/// A missing credential is not an error here; the request is sent bare.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match Session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Parse the body of a 2xx response, turn anything else into Err
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}
