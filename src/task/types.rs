use std::fmt;

use serde::Serialize;

use crate::core::When;

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub description: String,
    pub done: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

/// What sort of task this is, with the dates that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum TaskKind {
    Todo,
    Deadline { by: When },
    Event { from: When, to: When },
}

/// The kind of a task without its dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
}

impl TaskType {
    /// Single-letter code used in listings and the task file.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }

    /// Inverse of [`TaskType::code`].
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'T' => Some(Self::Todo),
            'D' => Some(Self::Deadline),
            'E' => Some(Self::Event),
            _ => None,
        }
    }

    /// The command word that creates this kind of task.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Task {
    /// Create a task that is not done yet.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        match self.kind {
            TaskKind::Todo => TaskType::Todo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
        }
    }

    /// Whether the description contains `keyword`. Case-sensitive.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        self.description.contains(keyword)
    }

    #[must_use]
    pub const fn status_icon(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{} {}",
            self.task_type().code(),
            self.status_icon(),
            self.description
        )?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {by})"),
            TaskKind::Event { from, to } => write!(f, " (from: {from} to: {to})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn deadline() -> Task {
        Task::new(
            "return book",
            TaskKind::Deadline {
                by: When::Date(NaiveDate::from_ymd_opt(2019, 12, 2).unwrap()),
            },
        )
    }

    #[test]
    fn test_new_task_is_not_done() {
        let task = Task::new("buy milk", TaskKind::Todo);
        assert!(!task.done);
        assert_eq!(task.task_type(), TaskType::Todo);
    }

    #[test]
    fn test_display_todo() {
        let mut task = Task::new("buy milk", TaskKind::Todo);
        assert_eq!(task.to_string(), "[T][ ] buy milk");
        task.done = true;
        assert_eq!(task.to_string(), "[T][X] buy milk");
    }

    #[test]
    fn test_display_deadline() {
        assert_eq!(deadline().to_string(), "[D][ ] return book (by: Dec 02 2019)");
    }

    #[test]
    fn test_display_event() {
        let task = Task::new(
            "meeting",
            TaskKind::Event {
                from: When::Text("Mon 2pm".to_string()),
                to: When::Text("4pm".to_string()),
            },
        );
        assert_eq!(task.to_string(), "[E][ ] meeting (from: Mon 2pm to: 4pm)");
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let task = deadline();
        assert!(task.matches("book"));
        assert!(task.matches("n b"));
        assert!(!task.matches("Book"));
    }

    #[test]
    fn test_type_codes() {
        for kind in [TaskType::Todo, TaskType::Deadline, TaskType::Event] {
            assert_eq!(TaskType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TaskType::from_code('X'), None);
    }

    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_value(deadline()).unwrap();
        assert_eq!(json["kind"], "deadline");
        assert_eq!(json["description"], "return book");
        assert_eq!(json["done"], false);
        assert_eq!(json["by"]["value"], "2019-12-02");
    }
}
