//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::home::HomeView;
use super::styles::Theme;
use crate::store::TaskStore;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    home: HomeView,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(export_dir: PathBuf, theme: Theme) -> Self {
        Self {
            home: HomeView::new(TaskStore::new(), export_dir),
            should_quit: false,
            theme,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            // Poll with short timeout so toasts can expire between key presses
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                        terminal.draw(|f| self.render(f))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|f| self.render(f))?;
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }

            if self.home.expire_toast(Instant::now()) {
                terminal.draw(|f| self.render(f))?;
            }
        }

        tracing::info!("Exiting with {} task(s) in memory", self.home.store().len());
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits even while an overlay is open
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(Action::Quit) = self.home.handle_key(key) {
            self.should_quit = true;
        }
    }

    fn render(&self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
