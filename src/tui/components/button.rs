//! Push-button rendering

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::styles::Theme;

/// Renders a bordered button. A focused button is drawn filled with its color.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    color: Color,
    is_focused: bool,
    theme: &Theme,
) {
    let (label_style, border_style) = if is_focused {
        (
            Style::default().fg(theme.background).bg(color).bold(),
            Style::default().fg(color).bold(),
        )
    } else {
        (Style::default().fg(color), Style::default().fg(theme.border))
    };

    let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}
