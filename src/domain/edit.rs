//! Edit session state
//!
//! At most one task is being edited at a time. The session remembers the
//! task by ID so a shifted list can't redirect the draft onto another task.

use super::id::TaskId;

/// An open edit: which task, and the unsaved draft text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task: TaskId,
    pub draft: String,
}

impl EditSession {
    /// Opens a session seeded with the task's current text
    pub fn new(task: TaskId, draft: impl Into<String>) -> Self {
        Self {
            task,
            draft: draft.into(),
        }
    }

    /// Returns true if this session belongs to the given task
    pub fn is_for(&self, id: &TaskId) -> bool {
        &self.task == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn session_tracks_task_and_draft() {
        let id = TaskId::new("a", Utc::now());
        let other = TaskId::new("b", Utc::now());
        let session = EditSession::new(id.clone(), "a");

        assert!(session.is_for(&id));
        assert!(!session.is_for(&other));
        assert_eq!(session.draft, "a");
    }
}
