//! Auth Operations
//!
//! Register/login/logout against the backend user endpoints. `login` is
//! pure with respect to local storage: the caller decides whether to open a
//! session with the returned token and user.

use gloo_net::http::Request;
use serde_json::json;

use super::{read_json, url, with_auth};
use crate::models::{Ack, AuthResponse, LoginResponse};

pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    let body = json!({
        "username": username,
        "email": email,
        "password": password,
    });
    let response = with_auth(Request::post(&url("/api/user/register")))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    let body = json!({ "email": email, "password": password });
    let response = with_auth(Request::post(&url("/api/user/login")))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn logout() -> Result<Ack, String> {
    let response = with_auth(Request::post(&url("/api/user/logout")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}
