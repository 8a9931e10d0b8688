//! Theme CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::Theme;
use crate::state::ThemeController;
use crate::storage::{FileKvStore, Workspace};

#[derive(Subcommand, Default)]
pub enum ThemeCommands {
    /// Print the current theme
    #[default]
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        /// `light` or `dark`
        theme: Theme,
    },
}

pub fn run(workspace: &Workspace, output: &Output, cmd: ThemeCommands) -> Result<()> {
    let mut controller = ThemeController::load(workspace.kv_store())?;

    match cmd {
        ThemeCommands::Show => {}
        ThemeCommands::Toggle => {
            let theme = controller.toggle()?;
            output.verbose_ctx("theme", &format!("Toggled theme to {}", theme));
        }
        ThemeCommands::Set { theme } => {
            controller.set(theme)?;
            output.verbose_ctx("theme", &format!("Set theme to {}", theme));
        }
    }

    report(output, &controller);
    Ok(())
}

fn report(output: &Output, controller: &ThemeController<FileKvStore>) {
    if output.is_json() {
        output.data(&serde_json::json!({
            "theme": controller.data_theme(),
            "class": controller.class_name(),
            "toggle_label": controller.toggle_label(),
        }));
    } else {
        println!("{}", controller.data_theme());
    }
}
