//! Interactive TUI for tickle
//!
//! One screen built with ratatui: the header with the theme toggle, the
//! new-task input, the task list and a status bar. Every change goes through
//! the same [`TaskStore`] and [`ThemeController`] the CLI commands use.

mod app;
mod event;
mod palette;
mod terminal;
mod view;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::Output;
use crate::state::{TaskStore, ThemeController};
use crate::storage::Workspace;
use app::App;
use event::EventHandler;

/// Launch the TUI
pub fn run(workspace: &Workspace, output: &Output) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    // Load before taking over the screen so load warnings stay readable
    let tasks = TaskStore::load(workspace.kv_store())?;
    let theme = ThemeController::load(workspace.kv_store())?;
    let mut app = App::new(tasks, theme);

    let mut terminal = terminal::init()?;

    let events = match EventHandler::new(workspace.config().tick_rate_ms) {
        Ok(events) => events,
        Err(e) => {
            terminal::restore()?;
            return Err(e);
        }
    };

    // Run the main loop with panic safety so the terminal is always restored
    let result = panic::catch_unwind(AssertUnwindSafe(|| app.run(&mut terminal, &events)));

    let restore_result = terminal::restore();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    }
}
