//! Application state shared by the CLI and the TUI
//!
//! - [`TaskStore`] - the task list plus input/edit state, persisted on change
//! - [`ThemeController`] - the active theme, persisted on change
//!
//! Both are generic over [`KvStore`](crate::storage::KvStore) so they run
//! against the file store in the binary and an in-memory store in tests.

mod tasks;
mod theme;

pub use tasks::{LookupError, TaskStore};
pub use theme::ThemeController;
