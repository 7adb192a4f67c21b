//! Live Task Events
//!
//! Event names and payload helpers for the push channel. Every successful
//! local mutation mirrors itself onto the channel; other sessions patch
//! their lists from these events.

use serde_json::Value;

use crate::models::Task;

pub const JOIN: &str = "join";
pub const TASK_CREATED: &str = "taskCreated";
pub const TASK_UPDATED: &str = "taskUpdated";
pub const TASK_COMPLETED: &str = "taskCompleted";
pub const TASK_DELETED: &str = "taskDeleted";

/// Full task object as event payload
pub fn task_payload(task: &Task) -> Value {
    serde_json::to_value(task).unwrap_or(Value::Null)
}

/// Task from an inbound created/updated/completed payload
pub fn event_task(data: Value) -> Option<Task> {
    serde_json::from_value(data).ok()
}

/// Identifier from an inbound deleted payload
///
/// Emitted as a bare string, but an `{_id: …}` object is accepted too.
pub fn event_task_id(data: &Value) -> Option<String> {
    data.as_str()
        .map(str::to_string)
        .or_else(|| {
            data.get("_id")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use serde_json::json;

    #[test]
    fn test_task_payload_round_trip() {
        let task = Task {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            status: TaskStatus::Pending,
        };
        let payload = task_payload(&task);
        assert_eq!(payload["_id"], "1");
        assert_eq!(event_task(payload), Some(task));
    }

    #[test]
    fn test_event_task_id_accepts_bare_string() {
        assert_eq!(event_task_id(&json!("1")), Some("1".to_string()));
    }

    #[test]
    fn test_event_task_id_accepts_object() {
        assert_eq!(event_task_id(&json!({"_id": "1"})), Some("1".to_string()));
    }

    #[test]
    fn test_event_task_id_rejects_other_shapes() {
        assert_eq!(event_task_id(&json!(42)), None);
        assert_eq!(event_task_id(&json!({"id": "1"})), None);
    }
}
