use crate::task::TaskType;

/// What one input line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Add(TaskType),
    Mark,
    Unmark,
    Delete,
    Find,
    Invalid,
}

impl Command {
    /// Map a command word to its command. Exact and case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "bye" => Self::Bye,
            "list" => Self::List,
            "todo" => Self::Add(TaskType::Todo),
            "deadline" => Self::Add(TaskType::Deadline),
            "event" => Self::Add(TaskType::Event),
            "mark" => Self::Mark,
            "unmark" => Self::Unmark,
            "delete" => Self::Delete,
            "find" => Self::Find,
            _ => Self::Invalid,
        }
    }

    /// Whether running this command changes the task list.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Add(_) | Self::Mark | Self::Unmark | Self::Delete)
    }
}

/// An input line split into its command and argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub command: Command,
    pub keyword: &'a str,
    /// Everything after the first whitespace following the keyword.
    pub args: &'a str,
}

/// Split `input` on its first whitespace and classify the leading word.
///
/// Leading whitespace is ignored. The argument text is returned untouched
/// (it may be empty or carry extra spaces).
#[must_use]
pub fn classify(input: &str) -> Classified<'_> {
    let line = input.trim_start();
    let (keyword, args) = match line.find(char::is_whitespace) {
        Some(at) => {
            let separator_len = line[at..].chars().next().map_or(1, char::len_utf8);
            (&line[..at], &line[at + separator_len..])
        },
        None => (line, ""),
    };

    Classified {
        command: Command::from_keyword(keyword),
        keyword,
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keywords() {
        let cases = [
            ("bye", Command::Bye),
            ("list", Command::List),
            ("todo", Command::Add(TaskType::Todo)),
            ("deadline", Command::Add(TaskType::Deadline)),
            ("event", Command::Add(TaskType::Event)),
            ("mark", Command::Mark),
            ("unmark", Command::Unmark),
            ("delete", Command::Delete),
            ("find", Command::Find),
        ];
        for (keyword, expected) in cases {
            assert_eq!(classify(keyword).command, expected, "{keyword}");
            assert_eq!(classify(keyword).args, "");
        }
    }

    #[test]
    fn test_args_are_text_after_first_whitespace() {
        let classified = classify("todo buy  milk ");
        assert_eq!(classified.command, Command::Add(TaskType::Todo));
        assert_eq!(classified.args, "buy  milk ");

        let classified = classify("deadline\treturn book /by sunday");
        assert_eq!(classified.keyword, "deadline");
        assert_eq!(classified.args, "return book /by sunday");

        assert_eq!(classify("mark  2").args, " 2");
    }

    #[test]
    fn test_leading_whitespace_ignored() {
        let classified = classify("   list");
        assert_eq!(classified.command, Command::List);
        assert_eq!(classified.keyword, "list");
    }

    #[test]
    fn test_unknown_and_near_misses() {
        for input in ["xyz", "", "   ", "LIST", "byebye", "todos x", "marks 1"] {
            assert_eq!(classify(input).command, Command::Invalid, "{input:?}");
        }
    }

    #[test]
    fn test_mutating_commands() {
        assert!(Command::Add(TaskType::Event).is_mutating());
        assert!(Command::Delete.is_mutating());
        assert!(!Command::List.is_mutating());
        assert!(!Command::Find.is_mutating());
        assert!(!Command::Bye.is_mutating());
    }
}
