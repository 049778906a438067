//! Command-line interface for serenity.

pub mod args;
pub mod commands;
