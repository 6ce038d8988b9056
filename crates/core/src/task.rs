//! The task model submitted for proving.
//!
//! The server forwards the task list to the external job runner as an
//! opaque payload; the only server-side interpretation of individual
//! fields is the total/completed counting in [`task_stats`].

use serde::{Deserialize, Serialize};

/// Maximum length of a task's text label, enforced where tasks are
/// created (the UI / client layer), not at the dispatch boundary.
pub const MAX_TASK_TEXT_LEN: usize = 280;

/// Fixed category set a task is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Urgent,
    Study,
    Health,
}

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Free-text label, at most [`MAX_TASK_TEXT_LEN`] characters.
    pub text: String,
    /// Completion flag.
    pub done: bool,
    /// Category the task is filed under.
    pub category: Category,
}

impl Task {
    /// Create a task after checking the text-length bound.
    ///
    /// Returns `None` if the text is empty (after trimming) or longer
    /// than [`MAX_TASK_TEXT_LEN`] characters.
    pub fn new(text: impl Into<String>, done: bool, category: Category) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() || text.chars().count() > MAX_TASK_TEXT_LEN {
            return None;
        }
        Some(Self {
            text,
            done,
            category,
        })
    }
}

/// Total and completed counts over a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: u32,
    pub completed: u32,
}

/// Count total and completed tasks.
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    TaskStats {
        total: tasks.len() as u32,
        completed: tasks.iter().filter(|t| t.done).count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_text() {
        assert!(Task::new("   ", false, Category::Work).is_none());
    }

    #[test]
    fn new_rejects_overlong_text() {
        let text = "x".repeat(MAX_TASK_TEXT_LEN + 1);
        assert!(Task::new(text, false, Category::Study).is_none());
    }

    #[test]
    fn new_accepts_max_length_text() {
        let text = "x".repeat(MAX_TASK_TEXT_LEN);
        assert!(Task::new(text, true, Category::Health).is_some());
    }

    #[test]
    fn stats_count_total_and_completed() {
        let tasks = vec![
            Task::new("write spec", true, Category::Work).unwrap(),
            Task::new("buy milk", false, Category::Personal).unwrap(),
            Task::new("revise notes", true, Category::Study).unwrap(),
        ];
        let stats = task_stats(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
    }

    #[test]
    fn category_serializes_as_plain_name() {
        let json = serde_json::to_string(&Category::Urgent).unwrap();
        assert_eq!(json, "\"Urgent\"");
    }

    #[test]
    fn task_round_trips_wire_shape() {
        let json = r#"{"text":"write spec","done":true,"category":"Work"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.text, "write spec");
        assert!(task.done);
        assert_eq!(task.category, Category::Work);
    }
}
