//! Tasklist - terminal task list manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tasklist::cli::{Cli, Commands};
use tasklist::{logging, tui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completions work without a terminal or log file
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "tasks", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(path) = logging::init()? {
        tracing::debug!("Logging to {}", path.display());
    }

    let export_dir = cli.resolve_export_dir()?;
    tui::run(export_dir, &cli.theme)
}
