//! Configuration management for serenity.
//!
//! This module handles loading configuration from `~/.serenity/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
