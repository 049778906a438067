use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use crate::config::ColorSetting;

#[derive(Parser)]
#[command(name = "serenity")]
#[command(about = "A chatty command-line task tracker for todos, deadlines and events")]
#[command(long_about = "serenity - a chatty task tracker

Type commands one line at a time and Serenity keeps your task list,
saving every change to a plain text file.

COMMANDS (inside a chat session):
  todo <description>                          Add a todo
  deadline <description> /by <date>           Add a deadline
  event <description> /from <date> /to <date> Add an event
  list                                        Show all tasks
  mark <n> / unmark <n>                       Mark task n as done / not done
  delete <n>                                  Remove task n
  find <keyword>                              Show tasks containing keyword
  bye                                         End the session

Dates accept 2019-12-02, tomorrow, fri 3pm, dec 15, in 3 days and more;
anything else is kept as written.

QUICK START:
  serenity                             Start a chat session
  serenity exec todo buy milk          Run one command and print the reply
  serenity list -o json                Print stored tasks as JSON")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Task file to read and write
    ///
    /// Overrides `general.data_file` from the config file.
    /// Defaults to ~/.serenity/data/serenity.txt.
    #[arg(short, long, env = "SERENITY_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Config file to load instead of ~/.serenity/config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorSetting>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for the `list` subcommand.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default)
    ///
    /// Reads one command per line from standard input until `bye` or
    /// end of input. Failed commands are reported and the session goes on.
    #[command(alias = "c")]
    Chat,

    /// Run a single command and print the reply
    ///
    /// The words are joined with spaces and handled exactly like one line
    /// of a chat session. Errors are printed as the reply.
    ///
    /// # Examples
    ///
    ///   serenity exec todo buy milk
    ///   serenity exec "deadline return book /by sunday"
    ///   serenity exec mark 2
    #[command(alias = "x")]
    Exec {
        /// The command line to run
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print the stored tasks
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   serenity completions bash > ~/.local/share/bash-completion/completions/serenity
    ///   serenity completions zsh > ~/.zfunc/_serenity
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["serenity"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_exec_collects_words() {
        let cli = Cli::try_parse_from(["serenity", "exec", "deadline", "x", "/by", "fri"]).unwrap();
        match cli.command {
            Some(Commands::Exec { words }) => assert_eq!(words.join(" "), "deadline x /by fri"),
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "serenity", "list", "-o", "json", "--file", "tasks.txt", "--color", "never",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("tasks.txt")));
        assert_eq!(cli.color, Some(ColorSetting::Never));
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                output: OutputFormat::Json
            })
        ));
    }
}
