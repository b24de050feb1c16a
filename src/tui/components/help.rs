//! Keyboard shortcut overlay

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Padding, Row, Table};

use crate::tui::styles::Theme;

const KEY_COLUMN: u16 = 11;

const SHORTCUTS: &[(&str, &str)] = &[
    ("Tab", "Next field or button"),
    ("Shift+Tab", "Previous field or button"),
    ("Enter", "Submit field / press button"),
    ("Space", "Press focused button"),
    ("Ctrl+E", "Export tasks to file"),
    ("Ctrl+K", "Clear all tasks"),
    ("F1", "Toggle this help"),
    ("Esc", "Close help / quit"),
    ("Ctrl+C", "Quit"),
];

/// Smallest box that shows every shortcut without clipping.
fn overlay_size() -> (u16, u16) {
    let desc_width = SHORTCUTS
        .iter()
        .map(|(_, desc)| desc.len() as u16)
        .max()
        .unwrap_or(0);
    // borders (2) + horizontal padding (2) + column gap (1)
    let width = KEY_COLUMN + desc_width + 5;
    // borders (2) + vertical padding (2)
    let height = SHORTCUTS.len() as u16 + 4;
    (width, height)
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let (width, height) = overlay_size();
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let rows = SHORTCUTS.iter().map(|(key, desc)| {
            Row::new(vec![
                Cell::from(*key).style(Style::default().fg(theme.warning).bold()),
                Cell::from(*desc).style(Style::default().fg(theme.text)),
            ])
        });
        let table = Table::new(rows, [Constraint::Length(KEY_COLUMN), Constraint::Fill(1)])
            .column_spacing(1)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(theme.title).bold())
                    .padding(Padding::uniform(1))
                    .style(Style::default().bg(theme.background)),
            );

        frame.render_widget(Clear, overlay);
        frame.render_widget(table, overlay);
    }
}
