//! Home view - task list, entry fields and buttons

mod operations;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::path::PathBuf;
use std::time::Instant;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::components::{render_button, render_text_field, HelpOverlay, Toast};
use super::styles::Theme;
use crate::store::TaskStore;

pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Add one to get started!";

/// Focusable elements, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TaskInput,
    AddButton,
    DeleteInput,
    DeleteButton,
    ExportButton,
    ClearButton,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::TaskInput,
        Focus::AddButton,
        Focus::DeleteInput,
        Focus::DeleteButton,
        Focus::ExportButton,
        Focus::ClearButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// A user request, decoupled from the key or button that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddTask(String),
    DeleteTask(String),
    ClearAll,
    Export,
}

pub struct HomeView {
    store: TaskStore,
    export_dir: PathBuf,

    // UI state
    task_input: Input,
    delete_input: Input,
    focus: Focus,

    // Overlays
    show_help: bool,
    toast: Option<Toast>,
}

impl HomeView {
    pub fn new(store: TaskStore, export_dir: PathBuf) -> Self {
        Self {
            store,
            export_dir,
            task_input: Input::default(),
            delete_input: Input::default(),
            focus: Focus::TaskInput,
            show_help: false,
            toast: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Drops the toast once it has been visible long enough. Returns true if
    /// the screen needs a redraw.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('e') if ctrl => self.dispatch(Intent::Export),
            KeyCode::Char('k') if ctrl => self.dispatch(Intent::ClearAll),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => self.dispatch(self.pressed_intent()),
            KeyCode::Char(' ') if !self.focus_is_input() => self.dispatch(self.pressed_intent()),
            _ => {
                if let Some(input) = self.focused_input_mut() {
                    input.handle_event(&Event::Key(key));
                }
            }
        }

        None
    }

    /// The intent fired by Enter (or Space) on the focused element.
    fn pressed_intent(&self) -> Intent {
        match self.focus {
            Focus::TaskInput | Focus::AddButton => {
                Intent::AddTask(self.task_input.value().to_string())
            }
            Focus::DeleteInput | Focus::DeleteButton => {
                Intent::DeleteTask(self.delete_input.value().to_string())
            }
            Focus::ExportButton => Intent::Export,
            Focus::ClearButton => Intent::ClearAll,
        }
    }

    fn focus_is_input(&self) -> bool {
        matches!(self.focus, Focus::TaskInput | Focus::DeleteInput)
    }

    fn focused_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            Focus::TaskInput => Some(&mut self.task_input),
            Focus::DeleteInput => Some(&mut self.delete_input),
            _ => None,
        }
    }

    /// Numbered task lines, or the placeholder when the list is empty.
    fn task_lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        if self.store.is_empty() {
            return vec![Line::from(Span::styled(
                EMPTY_PLACEHOLDER,
                Style::default().fg(theme.dimmed).italic(),
            ))];
        }

        self.store
            .numbered()
            .map(|(position, task)| {
                Line::from(vec![
                    Span::styled(format!("{}.", position), Style::default().fg(theme.number)),
                    Span::raw(" "),
                    Span::styled(task, Style::default().fg(theme.text)),
                ])
            })
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(3),    // tasks
                Constraint::Length(3), // add row
                Constraint::Length(3), // delete row
                Constraint::Length(1), // hints
            ])
            .split(area);

        self.render_header(frame, chunks[0], theme);
        self.render_tasks(frame, chunks[1], theme);
        self.render_add_row(frame, chunks[2], theme);
        self.render_delete_row(frame, chunks[3], theme);
        self.render_hints(frame, chunks[4], theme);

        if let Some(toast) = &self.toast {
            toast.render(frame, chunks[1], theme);
        }

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let count = match self.store.len() {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        };
        let title = Line::from(vec![
            Span::styled("✓ Task Manager", Style::default().fg(theme.title).bold()),
            Span::styled(format!("  ({})", count), Style::default().fg(theme.dimmed)),
        ]);

        let header = Paragraph::new(title).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(header, area);
    }

    fn render_tasks(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Tasks ")
            .title_style(Style::default().fg(theme.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = self.task_lines(theme);
        // Follow the newest tasks once the list outgrows the region
        let scroll = lines.len().saturating_sub(inner.height as usize);
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
    }

    fn render_add_row(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(area);

        render_text_field(
            frame,
            cols[0],
            "New task",
            &self.task_input,
            self.focus == Focus::TaskInput,
            "Enter a new task...",
            theme,
        );
        render_button(
            frame,
            cols[1],
            "Add",
            theme.primary,
            self.focus == Focus::AddButton,
            theme,
        );
    }

    fn render_delete_row(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(15),
            ])
            .split(area);

        render_text_field(
            frame,
            cols[0],
            "Task number",
            &self.delete_input,
            self.focus == Focus::DeleteInput,
            "Task number to delete...",
            theme,
        );
        let buttons = [
            ("Delete", theme.warning, Focus::DeleteButton),
            ("Export", theme.success, Focus::ExportButton),
            ("Clear All", theme.error, Focus::ClearButton),
        ];
        for ((label, color, focus), area) in buttons.into_iter().zip(cols.iter().skip(1)) {
            render_button(frame, *area, label, color, self.focus == focus, theme);
        }
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.hint).bold();
        let text_style = Style::default().fg(theme.dimmed);
        let hints = Line::from(vec![
            Span::styled("Tab", key_style),
            Span::styled(" focus  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" submit  ", text_style),
            Span::styled("^E", key_style),
            Span::styled(" export  ", text_style),
            Span::styled("^K", key_style),
            Span::styled(" clear  ", text_style),
            Span::styled("F1", key_style),
            Span::styled(" help  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" quit", text_style),
        ]);
        frame.render_widget(Paragraph::new(hints), area);
    }
}
