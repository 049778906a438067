//! Core abstractions for serenity.
//!
//! This module provides date handling shared by tasks and storage.

mod datetime;

pub use datetime::When;
