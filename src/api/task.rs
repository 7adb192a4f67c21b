//! Task Operations
//!
//! CRUD + search against the backend task endpoints.

use gloo_net::http::Request;
use serde_json::json;

use super::{read_json, url, with_auth};
use crate::models::{Ack, TaskListResponse, TaskResponse, TaskStatus};

pub async fn get_tasks() -> Result<TaskListResponse, String> {
    let response = with_auth(Request::get(&url("/api/task/tasks")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn search_tasks(text: &str) -> Result<TaskListResponse, String> {
    let response = with_auth(Request::get(&url("/api/task/search")).query([("text", text)]))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// New tasks always start pending
pub async fn create_task(title: &str) -> Result<TaskResponse, String> {
    let body = json!({ "title": title, "status": TaskStatus::Pending });
    let response = with_auth(Request::post(&url("/api/task/create-task")))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn update_task(id: &str, title: &str, status: TaskStatus) -> Result<TaskResponse, String> {
    let body = json!({ "title": title, "status": status });
    let response = with_auth(Request::put(&url(&format!("/api/task/update-task/{}", id))))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn complete_task(id: &str) -> Result<TaskResponse, String> {
    let body = json!({ "status": TaskStatus::Completed });
    let response = with_auth(Request::patch(&url(&format!("/api/task/complete-task/{}", id))))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete_task(id: &str) -> Result<Ack, String> {
    let response = with_auth(Request::delete(&url(&format!("/api/task/delete-task/{}", id))))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}
