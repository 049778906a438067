//! Output formatting for serenity.
//!
//! This module renders the stored task list for the `list` subcommand.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::SerenityError;
use crate::task::TaskList;

pub use json::format_tasks_json;
pub use pretty::format_tasks_pretty;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `SerenityError::Output` if JSON serialization fails.
pub fn format_tasks(tasks: &TaskList, format: OutputFormat) -> Result<String, SerenityError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}
