use std::io::{self, Stdout, Write};

use colored::Colorize;

use crate::error::SerenityError;
use crate::task::TaskList;

use super::{Ui, FAREWELL};

const DIVIDER_WIDTH: usize = 60;

/// Writes replies to a terminal (or any writer), framed by divider lines.
pub struct ConsoleUi<W: Write> {
    out: W,
    name: String,
}

impl ConsoleUi<Stdout> {
    /// Console UI on standard output.
    #[must_use]
    pub fn stdout(name: &str) -> Self {
        Self::new(io::stdout(), name)
    }
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(out: W, name: &str) -> Self {
        Self {
            out,
            name: name.to_string(),
        }
    }

    /// Consume the UI and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn framed(&mut self, body: &str) -> Result<(), SerenityError> {
        self.write_framed(body).map_err(SerenityError::Console)
    }

    fn write_framed(&mut self, body: &str) -> io::Result<()> {
        let divider = "─".repeat(DIVIDER_WIDTH);
        writeln!(self.out, "{}", divider.dimmed())?;
        for line in body.lines() {
            writeln!(self.out, " {line}")?;
        }
        writeln!(self.out, "{}", divider.dimmed())?;
        self.out.flush()
    }
}

impl<W: Write> Ui for ConsoleUi<W> {
    fn show_welcome(&mut self) -> Result<(), SerenityError> {
        let greeting = format!("Hello! I'm {}.\nWhat can I do for you?", self.name.bold());
        self.framed(&greeting)
    }

    fn show_message(&mut self, message: &str) -> Result<(), SerenityError> {
        self.framed(message)
    }

    fn show_task_list(&mut self, tasks: &TaskList) -> Result<(), SerenityError> {
        self.framed(&tasks.to_string())
    }

    fn show_goodbye(&mut self) -> Result<(), SerenityError> {
        self.framed(FAREWELL)
    }

    fn show_error(&mut self, error: &SerenityError) -> Result<(), SerenityError> {
        self.framed(&error.to_string().red().to_string())
    }
}
