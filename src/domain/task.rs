//! Task domain model
//!
//! A task is one to-do entry: display text plus a completion flag.

use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// Trims task text, returning `None` when nothing is left.
///
/// This is the only validation applied to task text.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, assigned at creation
    pub id: TaskId,

    /// Display text
    pub text: String,

    /// Whether the task has been ticked off
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replaces the text, leaving the completion flag alone
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Checkbox marker used by the text views
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_task(text: &str) -> Task {
        Task::new(TaskId::new(text, Utc::now()), text)
    }

    #[test]
    fn new_task_is_not_completed() {
        let task = make_task("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.marker(), "[ ]");
    }

    #[test]
    fn toggle_flips_and_restores() {
        let mut task = make_task("Buy milk");

        task.toggle();
        assert!(task.completed);
        assert_eq!(task.marker(), "[x]");

        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn set_text_preserves_completion() {
        let mut task = make_task("Buy milk");
        task.toggle();

        task.set_text("Buy oat milk");

        assert_eq!(task.text, "Buy oat milk");
        assert!(task.completed);
    }

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_text("  Buy milk \n"), Some("Buy milk".to_string()));
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("\t\n"), None);
    }

    #[test]
    fn serializes_text_and_completed() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t-7f2b4c1","text":"Buy milk","completed":true}"#,
        )
        .unwrap();

        assert_eq!(task.id.to_string(), "t-7f2b4c1");
        assert_eq!(task.text, "Buy milk");
        assert!(task.completed);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], true);
    }
}
