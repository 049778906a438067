//! JSON output formatting for serenity.

use serde_json::json;

use crate::error::SerenityError;
use crate::task::TaskList;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `SerenityError::Output` if JSON serialization fails.
pub fn format_tasks_json(tasks: &TaskList) -> Result<String, SerenityError> {
    let done = tasks.iter().filter(|t| t.done).count();
    let output = json!({
        "count": tasks.len(),
        "done": done,
        "items": tasks.as_slice(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
