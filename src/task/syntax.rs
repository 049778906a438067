//! Task creation syntax.
//!
//! Turns the argument text of `todo`, `deadline` and `event` into a [`Task`]:
//!
//! ```text
//! todo buy milk
//! deadline return book /by 2019-12-02
//! event project meeting /from mon 2pm /to mon 4pm
//! ```

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::When;
use crate::error::SerenityError;

use super::{Task, TaskKind, TaskType};

static DEADLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<desc>.*?)\s*/by\b\s*(?P<by>.*)$")
        .unwrap_or_else(|e| panic!("Invalid deadline regex: {e}"))
});

static EVENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "/from" must come before "/to"
    Regex::new(r"^(?P<desc>.*?)\s*/from\b\s*(?P<from>.*?)\s*/to\b\s*(?P<to>.*)$")
        .unwrap_or_else(|e| panic!("Invalid event regex: {e}"))
});

/// Build a task of `task_type` from the text after its command word.
///
/// # Errors
///
/// Returns `SerenityError::InvalidOperation` when the description or a
/// required date is missing.
pub fn parse_task(task_type: TaskType, args: &str, today: NaiveDate) -> Result<Task, SerenityError> {
    let args = args.trim();
    match task_type {
        TaskType::Todo => {
            let description = require_description(task_type, args)?;
            Ok(Task::new(description, TaskKind::Todo))
        },
        TaskType::Deadline => {
            let caps = DEADLINE_PATTERN.captures(args).ok_or_else(|| {
                SerenityError::invalid("A deadline needs a '/by' date, e.g. deadline return book /by 2019-12-02")
            })?;
            let description = require_description(task_type, &caps["desc"])?;
            let by = require_when("/by", &caps["by"], today)?;
            Ok(Task::new(description, TaskKind::Deadline { by }))
        },
        TaskType::Event => {
            let caps = EVENT_PATTERN.captures(args).ok_or_else(|| {
                SerenityError::invalid(
                    "An event needs '/from' and '/to' dates, e.g. event meeting /from mon 2pm /to mon 4pm",
                )
            })?;
            let description = require_description(task_type, &caps["desc"])?;
            let from = require_when("/from", &caps["from"], today)?;
            let to = require_when("/to", &caps["to"], today)?;
            Ok(Task::new(description, TaskKind::Event { from, to }))
        },
    }
}

fn require_description(task_type: TaskType, text: &str) -> Result<String, SerenityError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SerenityError::invalid(format!(
            "The description of a {task_type} cannot be empty."
        )));
    }
    if has_control(text) {
        return Err(SerenityError::invalid(format!(
            "The description of a {task_type} cannot contain line breaks or control characters."
        )));
    }
    Ok(text.to_string())
}

fn require_when(marker: &str, text: &str, today: NaiveDate) -> Result<When, SerenityError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SerenityError::invalid(format!(
            "The date after '{marker}' cannot be empty."
        )));
    }
    if has_control(text) {
        return Err(SerenityError::invalid(format!(
            "The date after '{marker}' cannot contain line breaks or control characters."
        )));
    }
    Ok(When::resolve_from(text, today))
}

/// Task text is stored one task per line.
fn has_control(text: &str) -> bool {
    text.chars().any(char::is_control)
}
