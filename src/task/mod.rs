//! Tasks and the in-memory task list.

mod list;
mod syntax;
mod types;

pub use list::TaskList;
pub use syntax::parse_task;
pub use types::{Task, TaskKind, TaskType};
