//! Command parsing and dispatch.
//!
//! Every input line goes through [`classify`] and one dispatch function.
//! Two entry points sit on top of it and differ only in where the reply and
//! any failure end up:
//!
//! - [`parse`] emits the reply through a [`Ui`] and returns failures.
//! - [`parse_to_string`] returns the reply text, or the failure text.

mod command;

pub use command::{classify, Classified, Command};

use tracing::debug;

use crate::error::SerenityError;
use crate::storage::TaskStore;
use crate::task::{TaskList, TaskType};
use crate::ui::{Ui, FAREWELL, INVALID_COMMAND};

/// Result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The user said `bye`.
    Farewell,
    /// The whole task list, rendered by whoever shows it.
    Listing,
    /// Any other message.
    Message(String),
}

/// What to do when a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Hand the error back to the caller.
    Propagate,
    /// Turn the error into a [`Reply::Message`] carrying its text.
    Capture,
}

/// Classify `input` and run it against `tasks`, persisting through `storage`.
///
/// # Errors
///
/// With [`ErrorPolicy::Propagate`], returns the error of a failed command:
/// malformed task syntax, a bad task number, an empty search keyword or a
/// failed write. With [`ErrorPolicy::Capture`] this never fails.
pub fn dispatch(
    input: &str,
    tasks: &mut TaskList,
    storage: &dyn TaskStore,
    policy: ErrorPolicy,
) -> Result<Reply, SerenityError> {
    let classified = classify(input);
    debug!(
        keyword = classified.keyword,
        command = ?classified.command,
        mutating = classified.command.is_mutating(),
        "Dispatching command"
    );

    match (execute(classified, tasks, storage), policy) {
        (Err(e), ErrorPolicy::Capture) => {
            debug!(error = %e, "Command failed");
            Ok(Reply::Message(e.to_string()))
        },
        (result, _) => result,
    }
}

/// Run one command and show the reply through `ui`.
///
/// # Errors
///
/// Returns the command's error, or `SerenityError::Console` if `ui` fails.
pub fn parse(
    input: &str,
    tasks: &mut TaskList,
    ui: &mut dyn Ui,
    storage: &dyn TaskStore,
) -> Result<(), SerenityError> {
    match dispatch(input, tasks, storage, ErrorPolicy::Propagate)? {
        Reply::Farewell => ui.show_goodbye(),
        Reply::Listing => ui.show_task_list(tasks),
        Reply::Message(message) => ui.show_message(&message),
    }
}

/// Run one command and return the reply text, or the error text on failure.
pub fn parse_to_string(input: &str, tasks: &mut TaskList, storage: &dyn TaskStore) -> String {
    match dispatch(input, tasks, storage, ErrorPolicy::Capture) {
        Ok(Reply::Farewell) => FAREWELL.to_string(),
        Ok(Reply::Listing) => tasks.to_string(),
        Ok(Reply::Message(message)) => message,
        Err(e) => e.to_string(),
    }
}

/// Whether `input` ends the session: its command word is exactly `bye`.
#[must_use]
pub fn is_exit(input: &str) -> bool {
    classify(input).command == Command::Bye
}

fn execute(
    classified: Classified<'_>,
    tasks: &mut TaskList,
    storage: &dyn TaskStore,
) -> Result<Reply, SerenityError> {
    let args = classified.args;
    match classified.command {
        Command::Bye => Ok(Reply::Farewell),
        Command::List => Ok(Reply::Listing),
        Command::Add(task_type) => add(task_type, args, tasks, storage),
        Command::Mark => commit(tasks, storage, |list| list.set_done(args, true)),
        Command::Unmark => commit(tasks, storage, |list| list.set_done(args, false)),
        Command::Delete => commit(tasks, storage, |list| list.delete(args)),
        Command::Find => tasks.find(args).map(Reply::Message),
        Command::Invalid => Ok(Reply::Message(INVALID_COMMAND.to_string())),
    }
}

fn add(
    task_type: TaskType,
    args: &str,
    tasks: &mut TaskList,
    storage: &dyn TaskStore,
) -> Result<Reply, SerenityError> {
    let task = tasks.create_task(task_type, args)?;
    storage.append(&task)?;
    Ok(Reply::Message(tasks.add(task)))
}

/// Apply `change` to a copy of `tasks` and keep it only once the file is
/// rewritten, so a failed write leaves the list as it was.
fn commit(
    tasks: &mut TaskList,
    storage: &dyn TaskStore,
    change: impl FnOnce(&mut TaskList) -> Result<String, SerenityError>,
) -> Result<Reply, SerenityError> {
    let mut updated = tasks.clone();
    let message = change(&mut updated)?;
    storage.rewrite(&updated)?;
    *tasks = updated;
    Ok(Reply::Message(message))
}
