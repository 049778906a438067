//! Storage layer for serenity.
//!
//! Tasks are persisted to a flat text file, one task per line. The dispatcher
//! only sees the [`TaskStore`] trait: new tasks are appended, status changes
//! and deletions rewrite the whole file.

pub mod codec;
mod file;

pub use file::FileStorage;

use crate::error::SerenityError;
use crate::task::{Task, TaskList};

/// Persistence sink used after each mutating command.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Persist a single newly added task.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Io` if the write fails.
    fn append(&self, task: &Task) -> Result<(), SerenityError>;

    /// Replace the stored tasks with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Io` if the write fails.
    fn rewrite(&self, tasks: &TaskList) -> Result<(), SerenityError>;
}
