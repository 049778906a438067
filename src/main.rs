use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use serenity::cli::args::{Cli, Commands};
use serenity::cli::commands::{self, Session};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "serenity".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr when `SERENITY_LOG` is set, using its value as the filter.
fn init_tracing() {
    if let Ok(filter) = std::env::var("SERENITY_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let session = Session::from_cli(&cli).context("failed to load configuration")?;
    let storage_path = session.storage.path().display().to_string();

    let output = match cli.command {
        None | Some(Commands::Chat) => commands::chat(&session),
        Some(Commands::Exec { words }) => commands::exec(&session, &words),
        Some(Commands::List { output }) => commands::list(&session, output),
        Some(Commands::Completions { .. }) => Ok(String::new()),
    }
    .with_context(|| format!("while using task file {storage_path}"))?;

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
