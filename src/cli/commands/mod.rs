//! Command implementations for serenity.
//!
//! Each subcommand returns the text to print, like the chat replies do.

mod chat;
mod completions;

pub use chat::run_chat;
pub use completions::completions;

use std::io;
use std::path::Path;

use tracing::debug;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::SerenityError;
use crate::output::format_tasks;
use crate::parser::parse_to_string;
use crate::storage::FileStorage;
use crate::ui::ConsoleUi;

/// Everything a subcommand needs: resolved config and the task file.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub storage: FileStorage,
}

impl Session {
    /// Resolve config, colors and the task file from command-line options.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Config` if the config file cannot be parsed.
    pub fn from_cli(cli: &Cli) -> Result<Self, SerenityError> {
        let paths = Paths::default();
        let config_file = cli.config.as_deref().unwrap_or(paths.config_file.as_path());
        let config = Config::load_from_path(config_file)?;

        cli.color.unwrap_or(config.general.color).apply();

        Ok(Self::new(config, cli.file.as_deref(), &paths))
    }

    /// Build a session from an already loaded config.
    #[must_use]
    pub fn new(config: Config, file: Option<&Path>, paths: &Paths) -> Self {
        let task_file = config.task_file(file, paths);
        debug!(path = %task_file.display(), "Using task file");
        Self {
            storage: FileStorage::new(task_file),
            config,
        }
    }
}

/// Execute the chat command on standard input and output.
///
/// # Errors
///
/// Returns an error if the task file cannot be loaded or the console fails.
pub fn chat(session: &Session) -> Result<String, SerenityError> {
    let mut tasks = session.storage.load()?;
    let mut ui = ConsoleUi::stdout(&session.config.general.name);
    run_chat(io::stdin().lock(), &mut tasks, &mut ui, &session.storage)?;
    Ok(String::new())
}

/// Execute one command line and return its reply, or the error text.
///
/// # Errors
///
/// Returns an error only if the task file cannot be loaded.
pub fn exec(session: &Session, words: &[String]) -> Result<String, SerenityError> {
    let mut tasks = session.storage.load()?;
    Ok(parse_to_string(&words.join(" "), &mut tasks, &session.storage))
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the task file cannot be loaded or formatting fails.
pub fn list(session: &Session, format: OutputFormat) -> Result<String, SerenityError> {
    let tasks = session.storage.load()?;
    format_tasks(&tasks, format)
}
