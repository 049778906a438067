//! User-facing output.
//!
//! The dispatcher talks to a [`Ui`]; the chat loop uses [`ConsoleUi`].

mod console;

pub use console::ConsoleUi;

use crate::error::SerenityError;
use crate::task::TaskList;

/// Farewell shown for `bye`.
pub const FAREWELL: &str = "Goodbye. Hope to see you again soon!";

/// Message for an unrecognized command word.
pub const INVALID_COMMAND: &str = "Error: Invalid task.";

/// Sink for everything the assistant says.
#[cfg_attr(test, mockall::automock)]
pub trait Ui {
    /// Greet the user when a session starts.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Console` if the output cannot be written.
    fn show_welcome(&mut self) -> Result<(), SerenityError>;

    /// Show a reply message.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Console` if the output cannot be written.
    fn show_message(&mut self, message: &str) -> Result<(), SerenityError>;

    /// Show the full task list.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Console` if the output cannot be written.
    fn show_task_list(&mut self, tasks: &TaskList) -> Result<(), SerenityError>;

    /// Say goodbye.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Console` if the output cannot be written.
    fn show_goodbye(&mut self) -> Result<(), SerenityError>;

    /// Report a failed command.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Console` if the output cannot be written.
    fn show_error(&mut self, error: &SerenityError) -> Result<(), SerenityError>;
}
