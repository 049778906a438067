use std::fmt::{self, Write as _};

use chrono::{Local, NaiveDate};

use crate::error::SerenityError;

use super::syntax::parse_task;
use super::{Task, TaskType};

/// Ordered, single-owner collection of tasks.
///
/// Positions are 0-based internally and 1-based in every message and command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 0-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Build a task from command arguments, resolving dates against today.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::InvalidOperation` for malformed task syntax.
    pub fn create_task(&self, task_type: TaskType, args: &str) -> Result<Task, SerenityError> {
        self.create_task_on(task_type, args, Local::now().date_naive())
    }

    /// Same as [`TaskList::create_task`] with an explicit "today".
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::InvalidOperation` for malformed task syntax.
    pub fn create_task_on(
        &self,
        task_type: TaskType,
        args: &str,
        today: NaiveDate,
    ) -> Result<Task, SerenityError> {
        parse_task(task_type, args, today)
    }

    /// Append a task and return the confirmation message.
    pub fn add(&mut self, task: Task) -> String {
        let message = format!("Got it. I've added this task:\n  {task}\n{}", self.count_line_after(1));
        self.tasks.push(task);
        message
    }

    /// Mark (`done = true`) or unmark the task numbered in `args`.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::InvalidOperation` if `args` is not a task number
    /// in range.
    pub fn set_done(&mut self, args: &str, done: bool) -> Result<String, SerenityError> {
        let index = self.resolve_index(args)?;
        let task = &mut self.tasks[index];
        task.done = done;

        Ok(if done {
            format!("Nice! I've marked this task as done:\n  {task}")
        } else {
            format!("OK, I've marked this task as not done yet:\n  {task}")
        })
    }

    /// Remove the task numbered in `args`; later tasks move up by one.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::InvalidOperation` if `args` is not a task number
    /// in range.
    pub fn delete(&mut self, args: &str) -> Result<String, SerenityError> {
        let index = self.resolve_index(args)?;
        let task = self.tasks.remove(index);
        Ok(format!(
            "Noted. I've removed this task:\n  {task}\n{}",
            self.count_line_after(0)
        ))
    }

    /// List every task whose description contains the keyword in `args`.
    ///
    /// Matches keep their position in the full list.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::InvalidOperation` if no keyword is given.
    pub fn find(&self, args: &str) -> Result<String, SerenityError> {
        let keyword = args.trim();
        if keyword.is_empty() {
            return Err(SerenityError::invalid("Please provide a keyword to search for."));
        }

        let mut matches = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.matches(keyword))
            .peekable();

        if matches.peek().is_none() {
            return Ok(format!("No matching tasks found for \"{keyword}\"."));
        }

        let mut output = String::from("Here are the matching tasks in your list:");
        for (index, task) in matches {
            let _ = write!(output, "\n{}.{task}", index + 1);
        }
        Ok(output)
    }

    /// Parse a 1-based task number into a 0-based position.
    fn resolve_index(&self, args: &str) -> Result<usize, SerenityError> {
        let raw = args.trim();
        if raw.is_empty() {
            return Err(SerenityError::invalid("Please provide a task number."));
        }

        let number: usize = raw
            .parse()
            .map_err(|_| SerenityError::invalid(format!("'{raw}' is not a valid task number.")))?;

        if number == 0 || number > self.tasks.len() {
            return Err(SerenityError::invalid(format!(
                "Task {number} does not exist. {}",
                count_sentence(self.tasks.len())
            )));
        }

        Ok(number - 1)
    }

    fn count_line_after(&self, added: usize) -> String {
        format!("Now {}", count_sentence(self.tasks.len() + added).to_lowercase())
    }
}

fn count_sentence(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("You have {count} {noun} in the list.")
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return f.write_str("You have no tasks in your list.");
        }

        f.write_str("Here are the tasks in your list:")?;
        for (index, task) in self.tasks.iter().enumerate() {
            write!(f, "\n{}.{task}", index + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    fn sample() -> TaskList {
        TaskList::from(vec![
            Task::new("read book", TaskKind::Todo),
            Task::new("return book", TaskKind::Todo),
            Task::new("buy milk", TaskKind::Todo),
        ])
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(TaskList::new().to_string(), "You have no tasks in your list.");
    }

    #[test]
    fn test_display_keeps_insertion_order() {
        assert_eq!(
            sample().to_string(),
            "Here are the tasks in your list:\n1.[T][ ] read book\n2.[T][ ] return book\n3.[T][ ] buy milk"
        );
    }

    #[test]
    fn test_add_message_counts() {
        let mut list = TaskList::new();
        let message = list.add(Task::new("buy milk", TaskKind::Todo));
        assert_eq!(
            message,
            "Got it. I've added this task:\n  [T][ ] buy milk\nNow you have 1 task in the list."
        );
        let message = list.add(Task::new("read", TaskKind::Todo));
        assert!(message.ends_with("Now you have 2 tasks in the list."));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_mark_only_touches_target() {
        let mut list = sample();
        let message = list.set_done("2", true).unwrap();
        assert_eq!(message, "Nice! I've marked this task as done:\n  [T][X] return book");
        assert!(!list.get(0).unwrap().done);
        assert!(list.get(1).unwrap().done);
        assert!(!list.get(2).unwrap().done);

        let message = list.set_done(" 2 ", false).unwrap();
        assert_eq!(message, "OK, I've marked this task as not done yet:\n  [T][ ] return book");
        assert!(list.iter().all(|t| !t.done));
    }

    #[test]
    fn test_index_errors() {
        let mut list = sample();
        assert_eq!(
            list.set_done("", true).unwrap_err().to_string(),
            "Error: Please provide a task number."
        );
        assert_eq!(
            list.set_done("two", true).unwrap_err().to_string(),
            "Error: 'two' is not a valid task number."
        );
        assert_eq!(
            list.delete("4").unwrap_err().to_string(),
            "Error: Task 4 does not exist. You have 3 tasks in the list."
        );
        assert!(list.delete("0").is_err());
        assert!(list.delete("-1").is_err());
        assert_eq!(list, sample());
    }

    #[test]
    fn test_delete_shifts_down() {
        let mut list = sample();
        let message = list.delete("1").unwrap();
        assert_eq!(
            message,
            "Noted. I've removed this task:\n  [T][ ] read book\nNow you have 2 tasks in the list."
        );
        assert_eq!(list.get(0).unwrap().description, "return book");
        assert_eq!(list.get(1).unwrap().description, "buy milk");
    }

    #[test]
    fn test_find_keeps_positions() {
        let list = sample();
        assert_eq!(
            list.find("book").unwrap(),
            "Here are the matching tasks in your list:\n1.[T][ ] read book\n2.[T][ ] return book"
        );
        assert_eq!(
            list.find("milk").unwrap(),
            "Here are the matching tasks in your list:\n3.[T][ ] buy milk"
        );
    }

    #[test]
    fn test_find_no_match_and_empty_keyword() {
        let list = sample();
        assert_eq!(list.find("Book").unwrap(), "No matching tasks found for \"Book\".");
        assert!(list.find("  ").is_err());
    }
}
