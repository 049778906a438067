//! Flat-file task storage.
//!
//! Tasks live in `~/.serenity/data/serenity.txt` unless configured otherwise,
//! one line per task in the format described in [`super::codec`].

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SerenityError;
use crate::task::{Task, TaskList};

use super::codec;
use super::TaskStore;

/// Task file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the file at `path`. Nothing is touched until the
    /// first load or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every task from the file.
    ///
    /// A missing file is an empty list. Lines that cannot be decoded are
    /// skipped with a warning so one bad edit does not lose the rest.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Io` if the file exists but cannot be read.
    pub fn load(&self) -> Result<TaskList, SerenityError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Task file does not exist yet");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();

        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode(line) {
                Ok(task) => tasks.push(task),
                Err(reason) => warn!(
                    path = %self.path.display(),
                    line = number + 1,
                    "Skipping corrupt task line: {reason}"
                ),
            }
        }

        debug!(count = tasks.len(), "Loaded tasks");
        Ok(TaskList::from(tasks))
    }

    fn ensure_parent(&self) -> Result<(), SerenityError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir)?;
                Ok(())
            },
            _ => Ok(()),
        }
    }
}

impl TaskStore for FileStorage {
    fn append(&self, task: &Task) -> Result<(), SerenityError> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", codec::encode(task))?;
        debug!(path = %self.path.display(), "Appended task");
        Ok(())
    }

    fn rewrite(&self, tasks: &TaskList) -> Result<(), SerenityError> {
        self.ensure_parent()?;
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        for task in tasks {
            writeln!(writer, "{}", codec::encode(task))?;
        }
        writer.flush()?;
        debug!(path = %self.path.display(), count = tasks.len(), "Rewrote task file");
        Ok(())
    }
}
