//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::SerenityError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `SerenityError::Config` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, SerenityError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "serenity", &mut buf);
    String::from_utf8(buf).map_err(|e| SerenityError::Config(format!("UTF-8 error: {e}")))
}
