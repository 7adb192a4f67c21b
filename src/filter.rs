//! List Filtering
//!
//! Status filter and title search applied to the in-memory task list.

use crate::models::{Task, TaskStatus};

/// Which statuses the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Tasks visible under the given filter and search text
///
/// Search is a case-insensitive substring match over the title; blank text
/// matches everything.
pub fn visible_tasks(tasks: &[Task], filter: StatusFilter, query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.matches(task.status))
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, title: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            status,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task("1", "Buy milk", TaskStatus::Pending),
            make_task("2", "Write ABC report", TaskStatus::Completed),
            make_task("3", "Call abc support", TaskStatus::Pending),
            make_task("4", "Water plants", TaskStatus::Completed),
        ]
    }

    #[test]
    fn test_filter_by_status() {
        let tasks = sample();
        let pending = visible_tasks(&tasks, StatusFilter::Pending, "");
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));

        let all = visible_tasks(&tasks, StatusFilter::All, "");
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tasks = sample();
        let found = visible_tasks(&tasks, StatusFilter::All, "aBc");
        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|t| t.id == "2"));
        assert!(found.iter().any(|t| t.id == "3"));
    }

    #[test]
    fn test_filter_commutes_with_search() {
        let tasks = sample();
        // Filter then search
        let filtered = visible_tasks(&tasks, StatusFilter::Completed, "");
        let a = visible_tasks(&filtered, StatusFilter::All, "abc");
        // Search then filter
        let searched = visible_tasks(&tasks, StatusFilter::All, "abc");
        let b = visible_tasks(&searched, StatusFilter::Completed, "");
        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].id, "2");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tasks = sample();
        let once = visible_tasks(&tasks, StatusFilter::Pending, "milk");
        let twice = visible_tasks(&once, StatusFilter::Pending, "milk");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let tasks = sample();
        assert_eq!(visible_tasks(&tasks, StatusFilter::All, "   ").len(), 4);
    }
}
