//! Domain models for tickle
//!
//! Contains the core to-do logic without any I/O concerns.

mod id;
mod task;
mod list;
mod edit;
mod theme;

pub use id::{TaskId, IdError};
pub use task::{normalize_text, Task};
pub use list::TaskList;
pub use edit::EditSession;
pub use theme::{Theme, ThemeParseError};
