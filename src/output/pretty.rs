use colored::Colorize;

use crate::task::{Task, TaskKind, TaskList};

/// Format the task list as a colored table
pub fn format_tasks_pretty(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "Tasks (0 items)\n  No tasks".to_string();
    }

    let done = tasks.iter().filter(|t| t.done).count();
    let mut output = format!("Tasks ({} items, {} done)\n", tasks.len(), done);
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (index, task) in tasks.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", index + 1, format_task_line(task)));
    }

    output
}

fn format_task_line(task: &Task) -> String {
    let status_icon = if task.done {
        "[X]".green()
    } else {
        "[ ]".white()
    };
    let code = format!("[{}]", task.task_type().code()).cyan();

    let name = if task.done {
        task.description.dimmed().to_string()
    } else {
        task.description.bold().to_string()
    };

    let mut line = format!("{code}{status_icon} {name}");

    match task.kind() {
        TaskKind::Todo => {},
        TaskKind::Deadline { by } => {
            line.push_str(&format!("  {}", format!("by {by}").yellow()));
        },
        TaskKind::Event { from, to } => {
            line.push_str(&format!("  {}", format!("{from} → {to}").yellow()));
        },
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::When;

    #[test]
    fn test_format_empty() {
        assert_eq!(format_tasks_pretty(&TaskList::new()), "Tasks (0 items)\n  No tasks");
    }

    #[test]
    fn test_format_tasks() {
        colored::control::set_override(false);
        let mut first = Task::new("buy milk", TaskKind::Todo);
        first.done = true;
        let tasks = TaskList::from(vec![
            first,
            Task::new(
                "meeting",
                TaskKind::Event {
                    from: When::Text("mon".to_string()),
                    to: When::Text("tue".to_string()),
                },
            ),
        ]);

        let output = format_tasks_pretty(&tasks);
        assert!(output.starts_with("Tasks (2 items, 1 done)\n"));
        assert!(output.contains("  1. [T][X] buy milk\n"));
        assert!(output.contains("  2. [E][ ] meeting  mon → tue\n"));
    }
}
