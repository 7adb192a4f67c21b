//! Frontend Models
//!
//! Data structures matching backend JSON (MongoDB-style `_id` fields,
//! lowercase status strings).

use serde::{Deserialize, Serialize};

/// Task status as the backend serializes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Authenticated user identity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub task: Option<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_backend_shape() {
        let task: Task =
            serde_json::from_str(r#"{"_id":"1","title":"Buy milk","status":"pending"}"#).unwrap();
        assert_eq!(task.id, "1");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(serde_json::to_string(&TaskStatus::Completed).unwrap(), r#""completed""#);
        let status: TaskStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(status, TaskStatus::Completed);
        assert_eq!(status.as_str(), "completed");
    }

    #[test]
    fn test_login_response_without_token() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }
}
