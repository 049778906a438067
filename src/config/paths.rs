//! Path resolution for serenity configuration and data files.
//!
//! All serenity data is stored in `~/.serenity/`:
//! - `config.yaml` - Main configuration file
//! - `data/serenity.txt` - The task file

use std::path::PathBuf;

use crate::error::SerenityError;

/// Paths to serenity configuration and data.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.serenity/`
    pub root: PathBuf,
    /// Config file: `~/.serenity/config.yaml`
    pub config_file: PathBuf,
    /// Data directory: `~/.serenity/data/`
    pub data_dir: PathBuf,
    /// Default task file: `~/.serenity/data/serenity.txt`
    pub task_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SerenityError> {
        let home = std::env::var("HOME")
            .map_err(|_| SerenityError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".serenity")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let data_dir = root.join("data");
        Self {
            config_file: root.join("config.yaml"),
            task_file: data_dir.join("serenity.txt"),
            data_dir,
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".serenity"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-serenity");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.data_dir, root.join("data"));
        assert_eq!(paths.task_file, root.join("data").join("serenity.txt"));
    }
}
