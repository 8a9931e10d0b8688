//! The task store
//!
//! Owns the in-memory task list plus the transient input state (pending
//! "new task" text and the edit session). Every change to the list is
//! written back to storage in full before the call returns.

use anyhow::Result;
use chrono::Utc;
use thiserror::Error;

use crate::domain::{normalize_text, EditSession, Task, TaskId, TaskList};
use crate::storage::{self, KvStore, TasksSlot};

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("No tasks yet")]
    Empty,
}

/// Ordered task list synchronized to a key-value store
pub struct TaskStore<K> {
    kv: K,
    tasks: TaskList,
    pending_input: String,
    edit: Option<EditSession>,
}

impl<K: KvStore> TaskStore<K> {
    /// Loads the task list from storage (empty if absent or unreadable)
    pub fn load(kv: K) -> Result<Self> {
        let tasks = storage::load::<TasksSlot>(&kv)?;
        tracing::debug!(count = tasks.len(), "loaded tasks");

        Ok(Self {
            kv,
            tasks,
            pending_input: String::new(),
            edit: None,
        })
    }

    fn persist(&mut self) -> Result<()> {
        storage::save::<TasksSlot>(&mut self.kv, &self.tasks)
    }

    /// Adds a task.
    ///
    /// Blank text is ignored and leaves the pending input alone; otherwise
    /// the pending input is cleared. Returns the new task's position.
    pub fn add(&mut self, text: &str) -> Result<Option<usize>> {
        let Some(index) = self.tasks.push(text, Utc::now()) else {
            return Ok(None);
        };
        self.pending_input.clear();
        self.persist()?;
        Ok(Some(index))
    }

    /// Adds the pending input as a new task
    pub fn submit_input(&mut self) -> Result<Option<usize>> {
        let text = self.pending_input.clone();
        self.add(&text)
    }

    /// Removes the task at `index`; out-of-range indices are ignored
    pub fn delete(&mut self, index: usize) -> Result<Option<Task>> {
        let Some(removed) = self.tasks.remove(index) else {
            return Ok(None);
        };
        if self.edit.as_ref().is_some_and(|s| s.is_for(&removed.id)) {
            self.edit = None;
        }
        self.persist()?;
        Ok(Some(removed))
    }

    /// Flips the completion flag of the task at `index`
    pub fn toggle_complete(&mut self, index: usize) -> Result<bool> {
        if !self.tasks.toggle(index) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Opens an edit session on the task at `index`, discarding any other
    pub fn start_edit(&mut self, index: usize) -> bool {
        match self.tasks.get(index) {
            Some(task) => {
                self.edit = Some(EditSession::new(task.id.clone(), task.text.clone()));
                true
            }
            None => false,
        }
    }

    /// Closes the edit session without saving
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Saves the draft into the task at `index`.
    ///
    /// A blank draft keeps the session open and changes nothing. The session
    /// must have been opened on the task currently at `index`.
    pub fn save_edit(&mut self, index: usize) -> Result<bool> {
        let Some(session) = &self.edit else {
            return Ok(false);
        };
        let Some(task) = self.tasks.get(index) else {
            return Ok(false);
        };
        if !session.is_for(&task.id) {
            tracing::debug!(index, "edit session belongs to another task");
            return Ok(false);
        }
        let Some(text) = normalize_text(&session.draft) else {
            return Ok(false);
        };

        self.tasks.set_text(index, &text);
        self.edit = None;
        self.persist()?;
        Ok(true)
    }

    /// Replaces the pending "new task" text
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Replaces the draft of the open edit session
    pub fn set_edit_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit {
            Some(session) => {
                session.draft = text.into();
                true
            }
            None => false,
        }
    }

    /// Resolves a user reference (1-based position or task ID) to an index
    pub fn resolve(&self, reference: &str) -> Result<usize, LookupError> {
        if self.tasks.is_empty() {
            return Err(LookupError::Empty);
        }

        let reference = reference.trim();
        let not_found = || LookupError::NotFound(reference.to_string());

        if let Ok(position) = reference.parse::<usize>() {
            return match position {
                0 => Err(not_found()),
                n if n <= self.tasks.len() => Ok(n - 1),
                _ => Err(not_found()),
            };
        }

        let id: TaskId = reference.parse().map_err(|_| not_found())?;
        self.tasks.position(&id).ok_or_else(not_found)
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn list(&self) -> &TaskList {
        &self.tasks
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Current position of the task being edited
    pub fn editing_index(&self) -> Option<usize> {
        self.edit
            .as_ref()
            .and_then(|session| self.tasks.position(&session.task))
    }

    /// Returns the underlying storage
    pub fn storage(&self) -> &K {
        &self.kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn empty_store() -> TaskStore<MemoryKvStore> {
        TaskStore::load(MemoryKvStore::new()).unwrap()
    }

    fn store_with(texts: &[&str]) -> TaskStore<MemoryKvStore> {
        let mut store = empty_store();
        for text in texts {
            store.add(text).unwrap();
        }
        store
    }

    fn texts(store: &TaskStore<MemoryKvStore>) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn flags(store: &TaskStore<MemoryKvStore>) -> Vec<bool> {
        store.tasks().iter().map(|t| t.completed).collect()
    }

    /// Decodes what the store last wrote
    fn persisted(store: &TaskStore<MemoryKvStore>) -> TaskList {
        storage::load::<TasksSlot>(store.storage()).unwrap()
    }

    // ==========================================================================
    // Add
    // ==========================================================================

    #[test]
    fn add_to_empty_list_persists_roundtrip() {
        let mut store = empty_store();

        let index = store.add("Buy milk").unwrap();

        assert_eq!(index, Some(0));
        assert_eq!(texts(&store), vec!["Buy milk"]);
        assert_eq!(flags(&store), vec![false]);
        assert_eq!(&persisted(&store), store.list());
    }

    #[test]
    fn add_whitespace_is_noop() {
        let mut store = store_with(&["a"]);
        store.set_pending_input("   ");

        assert_eq!(store.add("   ").unwrap(), None);

        assert_eq!(texts(&store), vec!["a"]);
        assert_eq!(store.pending_input(), "   ");
    }

    #[test]
    fn blank_add_does_not_write() {
        let mut store = empty_store();
        store.add("").unwrap();
        assert_eq!(store.storage().raw("tasks"), None);
    }

    #[test]
    fn submit_input_adds_and_clears() {
        let mut store = empty_store();
        store.set_pending_input("  Walk the dog ");

        assert_eq!(store.submit_input().unwrap(), Some(0));

        assert_eq!(texts(&store), vec!["Walk the dog"]);
        assert_eq!(store.pending_input(), "");
    }

    // ==========================================================================
    // Toggle / delete
    // ==========================================================================

    #[test]
    fn toggle_flips_only_target() {
        let mut store = store_with(&["a", "b", "c"]);

        assert!(store.toggle_complete(1).unwrap());
        assert_eq!(flags(&store), vec![false, true, false]);
        assert_eq!(texts(&store), vec!["a", "b", "c"]);
        assert_eq!(&persisted(&store), store.list());

        assert!(store.toggle_complete(1).unwrap());
        assert_eq!(flags(&store), vec![false, false, false]);
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.toggle_complete(1).unwrap());
        assert_eq!(flags(&store), vec![false]);
    }

    #[test]
    fn delete_shifts_indices() {
        let mut store = store_with(&["a", "b", "c"]);

        store.delete(0).unwrap();
        assert_eq!(texts(&store), vec!["b", "c"]);

        store.delete(0).unwrap();
        assert_eq!(texts(&store), vec!["c"]);
        assert_eq!(&persisted(&store), store.list());
    }

    #[test]
    fn delete_out_of_range_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(store.delete(3).unwrap().is_none());
        assert_eq!(texts(&store), vec!["a"]);
    }

    #[test]
    fn delete_of_edited_task_closes_session() {
        let mut store = store_with(&["a", "b"]);
        store.start_edit(1);

        store.delete(1).unwrap();

        assert!(store.edit_session().is_none());
    }

    #[test]
    fn delete_of_other_task_keeps_session() {
        let mut store = store_with(&["a", "b"]);
        store.start_edit(1);

        store.delete(0).unwrap();

        assert_eq!(store.editing_index(), Some(0));
    }

    // ==========================================================================
    // Edit session
    // ==========================================================================

    #[test]
    fn blank_draft_keeps_session_open() {
        let mut store = store_with(&["Old text"]);

        assert!(store.start_edit(0));
        assert!(store.set_edit_draft(""));
        assert!(!store.save_edit(0).unwrap());

        assert_eq!(texts(&store), vec!["Old text"]);
        assert_eq!(store.editing_index(), Some(0));
    }

    #[test]
    fn save_edit_replaces_text_and_keeps_completed() {
        let mut store = store_with(&["Old text"]);
        store.toggle_complete(0).unwrap();

        store.start_edit(0);
        store.set_edit_draft("");
        store.save_edit(0).unwrap();
        store.set_edit_draft("New text");
        assert!(store.save_edit(0).unwrap());

        assert_eq!(texts(&store), vec!["New text"]);
        assert_eq!(flags(&store), vec![true]);
        assert!(store.edit_session().is_none());
        assert_eq!(&persisted(&store), store.list());
    }

    #[test]
    fn save_edit_trims_draft() {
        let mut store = store_with(&["a"]);
        store.start_edit(0);
        store.set_edit_draft("  b  ");
        store.save_edit(0).unwrap();
        assert_eq!(texts(&store), vec!["b"]);
    }

    #[test]
    fn start_edit_seeds_draft_and_replaces_previous() {
        let mut store = store_with(&["a", "b"]);

        store.start_edit(0);
        store.set_edit_draft("changed");
        store.start_edit(1);

        let session = store.edit_session().unwrap();
        assert_eq!(session.draft, "b");
        assert_eq!(store.editing_index(), Some(1));
        assert_eq!(texts(&store), vec!["a", "b"]);
    }

    #[test]
    fn start_edit_out_of_range_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.start_edit(4));
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn cancel_edit_leaves_list_alone() {
        let mut store = store_with(&["a"]);
        store.start_edit(0);
        store.set_edit_draft("zzz");

        store.cancel_edit();

        assert!(store.edit_session().is_none());
        assert_eq!(texts(&store), vec!["a"]);
    }

    #[test]
    fn save_edit_without_session_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.save_edit(0).unwrap());
        assert!(!store.set_edit_draft("x"));
    }

    #[test]
    fn save_edit_on_other_index_is_rejected() {
        let mut store = store_with(&["a", "b"]);
        store.start_edit(0);
        store.set_edit_draft("changed");

        assert!(!store.save_edit(1).unwrap());

        assert_eq!(texts(&store), vec!["a", "b"]);
        assert!(store.edit_session().is_some());
    }

    #[test]
    fn transient_updates_do_not_write() {
        let mut store = empty_store();
        store.set_pending_input("draft");
        assert_eq!(store.storage().raw("tasks"), None);
    }

    // ==========================================================================
    // Loading and lookup
    // ==========================================================================

    #[test]
    fn load_malformed_data_starts_empty() {
        let kv = MemoryKvStore::new().with("tasks", "[{broken");
        let store = TaskStore::load(kv).unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn load_existing_tasks() {
        let kv = MemoryKvStore::new().with(
            "tasks",
            r#"[{"text":"a","completed":true},{"text":"b","completed":false}]"#,
        );
        let store = TaskStore::load(kv).unwrap();

        assert_eq!(texts(&store), vec!["a", "b"]);
        assert_eq!(flags(&store), vec![true, false]);
    }

    #[test]
    fn resolve_by_position_and_id() {
        let store = store_with(&["a", "b"]);
        let id = store.tasks()[1].id.to_string();

        assert_eq!(store.resolve("1"), Ok(0));
        assert_eq!(store.resolve("2"), Ok(1));
        assert_eq!(store.resolve(&id), Ok(1));
    }

    #[test]
    fn resolve_rejects_unknown_references() {
        let store = store_with(&["a"]);

        assert_eq!(store.resolve("0"), Err(LookupError::NotFound("0".into())));
        assert_eq!(store.resolve("2"), Err(LookupError::NotFound("2".into())));
        assert_eq!(
            store.resolve("t-0000000"),
            Err(LookupError::NotFound("t-0000000".into()))
        );
        assert_eq!(store.resolve("milk"), Err(LookupError::NotFound("milk".into())));
        assert_eq!(empty_store().resolve("1"), Err(LookupError::Empty));
    }
}
