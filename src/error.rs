//! Error type shared by every serenity component.
//!
//! The `Display` text of each variant is exactly what the user sees, so the
//! string-returning entry point can hand it back verbatim.

use thiserror::Error;

/// Errors produced while handling a command.
#[derive(Debug, Error)]
pub enum SerenityError {
    /// The command was understood but its arguments were not usable:
    /// malformed task syntax, a bad task number, an empty search keyword.
    #[error("Error: {0}")]
    InvalidOperation(String),

    /// Reading or writing the task file failed.
    #[error("Error: could not access the task file: {0}")]
    Io(#[from] std::io::Error),

    /// Reading input or writing replies on the console failed.
    #[error("Error: could not use the console: {0}")]
    Console(#[source] std::io::Error),

    /// Task data could not be rendered as JSON.
    #[error("Error: could not format output: {0}")]
    Output(#[from] serde_json::Error),

    /// Configuration could not be loaded or resolved.
    #[error("Error: {0}")]
    Config(String),
}

impl SerenityError {
    /// Shorthand for [`SerenityError::InvalidOperation`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operation_display() {
        let err = SerenityError::invalid("Task 3 does not exist.");
        assert_eq!(err.to_string(), "Error: Task 3 does not exist.");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SerenityError = io.into();
        assert!(matches!(err, SerenityError::Io(_)));
        assert!(err.to_string().starts_with("Error: could not access the task file"));
    }

    #[test]
    fn test_console_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = SerenityError::Console(io);
        assert_eq!(err.to_string(), "Error: could not use the console: closed");
    }
}
