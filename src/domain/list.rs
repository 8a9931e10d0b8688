//! Ordered task list
//!
//! Insertion order is display order. Positions are 0-based here; the CLI
//! shows them 1-based.

use chrono::{DateTime, Utc};

use super::id::TaskId;
use super::task::{normalize_text, Task};

/// An ordered sequence of tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps an already ordered sequence of tasks
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    /// Appends a task with the given text.
    ///
    /// Returns the new task's position, or `None` when the text is blank.
    pub fn push(&mut self, text: &str, now: DateTime<Utc>) -> Option<usize> {
        let text = normalize_text(text)?;
        let id = TaskId::unique(&text, now, |candidate| self.contains(candidate));
        self.0.push(Task::new(id, text));
        Some(self.0.len() - 1)
    }

    /// Removes the task at `index`, shifting later tasks down by one
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Flips the completion flag of the task at `index`
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Replaces the text of the task at `index`.
    ///
    /// Blank text is rejected and leaves the task untouched.
    pub fn set_text(&mut self, index: usize, text: &str) -> bool {
        let Some(text) = normalize_text(text) else {
            return false;
        };
        match self.0.get_mut(index) {
            Some(task) => {
                task.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Returns the task at `index`
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Returns the position of the task with the given ID
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.0.iter().position(|t| &t.id == id)
    }

    /// Returns true if a task with the given ID exists
    pub fn contains(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|t| t.completed).count()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
