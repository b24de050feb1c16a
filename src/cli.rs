//! Command line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::tui::themes::DEFAULT_THEME;

#[derive(Debug, Parser)]
#[command(name = "tasks")]
#[command(about = "Terminal task list manager", version)]
pub struct Cli {
    /// Directory that exported task lists are written to
    #[arg(long, env = "TASKLIST_EXPORT_DIR", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Colour theme (phosphor, tokyo-night)
    #[arg(long, env = "TASKLIST_THEME", default_value = DEFAULT_THEME)]
    pub theme: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// The export directory, defaulting to the current working directory.
    pub fn resolve_export_dir(&self) -> std::io::Result<PathBuf> {
        match &self.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
