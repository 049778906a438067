//! Line format of the task file.
//!
//! ```text
//! T | 0 | buy milk
//! D | 1 | return book | 2019-12-02
//! E | 0 | project meeting | 2019-08-06 14:00 | 2019-08-06 16:00
//! ```
//!
//! The description sits between the done flag and the trailing date fields,
//! so it may itself contain the separator. Date fields escape `\` and `|`
//! with a backslash so they never do.

use crate::core::When;
use crate::task::{Task, TaskKind, TaskType};

const SEPARATOR: &str = " | ";

/// Encode one task as a single line (without the newline).
#[must_use]
pub fn encode(task: &Task) -> String {
    let flag = if task.done { "1" } else { "0" };
    let mut fields = vec![
        task.task_type().code().to_string(),
        flag.to_string(),
        task.description.clone(),
    ];

    match task.kind() {
        TaskKind::Todo => {},
        TaskKind::Deadline { by } => fields.push(escape(&by.to_storage())),
        TaskKind::Event { from, to } => {
            fields.push(escape(&from.to_storage()));
            fields.push(escape(&to.to_storage()));
        },
    }

    fields.join(SEPARATOR)
}

/// Decode a line written by [`encode`].
///
/// Returns a short reason when the line is not a valid task.
pub fn decode(line: &str) -> Result<Task, String> {
    let mut head = line.splitn(3, SEPARATOR);
    let (Some(code), Some(flag), Some(rest)) = (head.next(), head.next(), head.next()) else {
        return Err("too few fields".to_string());
    };

    let task_type = single_char(code)
        .and_then(TaskType::from_code)
        .ok_or_else(|| format!("unknown task type '{code}'"))?;

    let done = match flag {
        "1" => true,
        "0" => false,
        other => return Err(format!("invalid done flag '{other}'")),
    };

    let (description, kind) = match task_type {
        TaskType::Todo => (rest, TaskKind::Todo),
        TaskType::Deadline => {
            let (description, by) = rest
                .rsplit_once(SEPARATOR)
                .ok_or_else(|| "deadline without a date".to_string())?;
            (description, TaskKind::Deadline { by: When::from_storage(&unescape(by)) })
        },
        TaskType::Event => {
            let mut tail = rest.rsplitn(3, SEPARATOR);
            let (Some(to), Some(from), Some(description)) = (tail.next(), tail.next(), tail.next())
            else {
                return Err("event without both dates".to_string());
            };
            (
                description,
                TaskKind::Event {
                    from: When::from_storage(&unescape(from)),
                    to: When::from_storage(&unescape(to)),
                },
            )
        },
    };

    if description.trim().is_empty() {
        return Err("empty description".to_string());
    }

    let mut task = Task::new(description, kind);
    task.done = done;
    Ok(task)
}

fn escape(field: &str) -> String {
    field.replace('\\', "\\\\").replace('|', "\\|")
}

fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn at(y: i32, m: u32, d: u32, h: u32) -> When {
        When::DateTime(NaiveDateTime::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_encode_each_kind() {
        let mut todo = Task::new("buy milk", TaskKind::Todo);
        todo.done = true;
        assert_eq!(encode(&todo), "T | 1 | buy milk");

        let deadline = Task::new(
            "return book",
            TaskKind::Deadline {
                by: When::Date(NaiveDate::from_ymd_opt(2019, 12, 2).unwrap()),
            },
        );
        assert_eq!(encode(&deadline), "D | 0 | return book | 2019-12-02");

        let event = Task::new(
            "project meeting",
            TaskKind::Event {
                from: at(2019, 8, 6, 14),
                to: at(2019, 8, 6, 16),
            },
        );
        assert_eq!(
            encode(&event),
            "E | 0 | project meeting | 2019-08-06 14:00 | 2019-08-06 16:00"
        );
    }

    #[test]
    fn test_decode_event() {
        let task = decode("E | 1 | project meeting | 2019-08-06 14:00 | Friday").unwrap();
        assert!(task.done);
        assert_eq!(task.description, "project meeting");
        assert_eq!(
            task.kind(),
            &TaskKind::Event {
                from: at(2019, 8, 6, 14),
                to: When::Text("Friday".to_string()),
            }
        );
    }

    #[test]
    fn test_description_may_contain_separator() {
        let task = Task::new(
            "pick a | b",
            TaskKind::Deadline {
                by: When::Text("soon".to_string()),
            },
        );
        let line = encode(&task);
        assert_eq!(decode(&line).unwrap(), task);

        let todo = Task::new("x | y", TaskKind::Todo);
        assert_eq!(decode(&encode(&todo)).unwrap(), todo);
    }

    #[test]
    fn test_dates_may_contain_separator() {
        let deadline = Task::new(
            "pay rent",
            TaskKind::Deadline {
                by: When::Text("a | b".to_string()),
            },
        );
        let line = encode(&deadline);
        assert_eq!(line, r"D | 0 | pay rent | a \| b");
        assert_eq!(decode(&line).unwrap(), deadline);

        let event = Task::new(
            "x | y",
            TaskKind::Event {
                from: When::Text(r"C:\temp | now".to_string()),
                to: When::Text(r"end\".to_string()),
            },
        );
        assert_eq!(decode(&encode(&event)).unwrap(), event);
    }

    #[test]
    fn test_decode_rejects_corrupt_lines() {
        assert_eq!(decode("T | 0").unwrap_err(), "too few fields");
        assert_eq!(decode("X | 0 | what").unwrap_err(), "unknown task type 'X'");
        assert_eq!(decode("T | yes | what").unwrap_err(), "invalid done flag 'yes'");
        assert_eq!(decode("D | 0 | no date").unwrap_err(), "deadline without a date");
        assert_eq!(decode("E | 0 | meeting | mon").unwrap_err(), "event without both dates");
        assert_eq!(decode("T | 0 |  ").unwrap_err(), "empty description");
    }
}
