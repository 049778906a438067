//! Interactive chat session.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::error::SerenityError;
use crate::parser::{is_exit, parse};
use crate::storage::TaskStore;
use crate::task::TaskList;
use crate::ui::Ui;

/// Read commands from `input` line by line until `bye` or end of input.
///
/// A failing command is shown through `ui` and the session continues, as
/// does a line that is not valid UTF-8.
///
/// # Errors
///
/// Returns `SerenityError::Console` if reading input or writing output fails.
pub fn run_chat<R: BufRead>(
    input: R,
    tasks: &mut TaskList,
    ui: &mut dyn Ui,
    storage: &dyn TaskStore,
) -> Result<(), SerenityError> {
    ui.show_welcome()?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "Skipping undecodable input line");
                ui.show_error(&SerenityError::Console(e))?;
                continue;
            },
            Err(e) => return Err(SerenityError::Console(e)),
        };
        if let Err(e) = parse(&line, tasks, ui, storage) {
            debug!(error = %e, "Command failed");
            ui.show_error(&e)?;
        }
        if is_exit(&line) {
            return Ok(());
        }
    }

    debug!("Input closed without bye");
    Ok(())
}
