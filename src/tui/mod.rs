//! Terminal User Interface module

mod app;
mod components;
mod home;
mod styles;
pub mod themes;

pub use app::*;
pub use styles::Theme;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;

pub fn run(export_dir: PathBuf, theme: &str) -> Result<()> {
    let theme = themes::load_theme(theme);
    tracing::info!("Starting TUI, exports go to {}", export_dir.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_restore(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(Terminal::new(backend), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    // Create app and run
    let mut app = App::new(export_dir, theme);
    let result = app.run(&mut terminal);

    // Restore terminal before reporting any loop error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Runs `restore` when a setup step fails, so a half-initialised terminal is
/// never left behind.
fn or_restore<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_or_restore_runs_cleanup_on_error() {
        let restored = Cell::new(false);
        let result: Result<(), &str> = or_restore(Err("setup failed"), || restored.set(true));
        assert_eq!(result, Err("setup failed"));
        assert!(restored.get());
    }

    #[test]
    fn test_or_restore_skips_cleanup_on_success() {
        let restored = Cell::new(false);
        let result: Result<u8, &str> = or_restore(Ok(7), || restored.set(true));
        assert_eq!(result, Ok(7));
        assert!(!restored.get());
    }
}
