//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add <text>` | Append a task |
//! | `list` / `ls` | Show tasks in order |
//! | `toggle <task>` / `done <task>` | Flip a task's completed flag |
//! | `edit <task> <text>` | Replace a task's text |
//! | `rm <task>` | Delete a task |
//! | `theme [show\|toggle\|set]` | Light/dark preference |
//! | `ui` | Interactive TUI |
//!
//! `<task>` is a 1-based position as shown by `list`, or a task ID.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! tickle --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod task;
mod theme_cmd;
mod tui;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
