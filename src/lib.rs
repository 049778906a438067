//! serenity - a chatty command-line task tracker
//!
//! This crate reads one command per line, keeps an in-memory list of todos,
//! deadlines and events, and saves every change to a flat text file.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;
pub mod storage;
pub mod task;
pub mod ui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SerenityError;
pub use parser::{is_exit, parse, parse_to_string};
pub use storage::{FileStorage, TaskStore};
pub use task::{Task, TaskList};
