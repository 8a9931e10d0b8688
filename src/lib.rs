//! tickle - a local-first to-do list for the terminal
//!
//! Tasks are a flat ordered list of `{text, completed}` records, written to
//! a small key-value store after every change, with a light/dark theme
//! preference stored alongside. Use it from the command line or the
//! interactive TUI.

pub mod domain;
pub mod storage;
pub mod state;
pub mod cli;

pub use domain::{Task, TaskId, TaskList, Theme};
pub use state::{TaskStore, ThemeController};
