//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use super::output::{Output, OutputFormat};
use super::{task, theme_cmd, tui};
use crate::storage::{Config, Workspace};

#[derive(Parser)]
#[command(name = "tickle")]
#[command(author, version, about = "A local-first to-do list for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory holding the task store
    #[arg(long, global = true, env = "TICKLE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    ///
    /// Examples:
    ///   tickle add "Buy milk"
    ///   tickle add Call the plumber
    Add {
        /// Task text (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List tasks in order
    #[command(visible_alias = "ls")]
    List,

    /// Mark a task done, or not done again
    #[command(visible_alias = "done")]
    Toggle {
        /// Task position (1-based) or ID
        task: String,
    },

    /// Replace a task's text
    Edit {
        /// Task position (1-based) or ID
        task: String,

        /// New text (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Delete a task
    #[command(visible_alias = "delete")]
    Rm {
        /// Task position (1-based) or ID
        task: String,
    },

    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<theme_cmd::ThemeCommands>,
    },

    /// Open the interactive to-do list
    Ui,
}

/// Installs the stderr log subscriber.
///
/// The TUI owns the terminal, so it never gets debug chatter.
fn init_logging(verbose: bool, interactive: bool) {
    let level = if verbose && !interactive {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let init_result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);
    init_logging(output.is_verbose(), matches!(cli.command, Commands::Ui));

    output.verbose("tickle starting");

    let workspace = Workspace::resolve(config, cli.data_dir.as_deref())?;
    output.verbose_ctx(
        "storage",
        &format!("Using data directory: {}", workspace.root().display()),
    );

    match cli.command {
        Commands::Add { text } => task::add(&workspace, &output, &text.join(" "))?,
        Commands::List => task::list(&workspace, &output)?,
        Commands::Toggle { task: reference } => task::toggle(&workspace, &output, &reference)?,
        Commands::Edit {
            task: reference,
            text,
        } => task::edit(&workspace, &output, &reference, &text.join(" "))?,
        Commands::Rm { task: reference } => task::remove(&workspace, &output, &reference)?,
        Commands::Theme { action } => {
            theme_cmd::run(&workspace, &output, action.unwrap_or_default())?
        }
        Commands::Ui => tui::run(&workspace, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
