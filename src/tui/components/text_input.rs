//! Shared text input rendering component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders a bordered text entry with its label as the block title.
///
/// When focused, displays an inverse-video cursor over the current character position.
/// When not focused and empty, displays the placeholder.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    placeholder: &str,
    theme: &Theme,
) {
    let border_style = if is_focused {
        Style::default().fg(theme.focus_border)
    } else {
        Style::default().fg(theme.border)
    };
    let value_style = Style::default().fg(theme.text);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", label))
        .title_style(if is_focused {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.dimmed)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = input.value();
    let mut spans = Vec::new();

    if value.is_empty() && !is_focused {
        spans.push(Span::styled(placeholder, Style::default().fg(theme.dimmed)));
    } else if is_focused {
        // Keep the cursor inside the visible width
        let width = inner.width.max(1) as usize;
        let scroll = input.visual_scroll(width);
        let cursor_pos = input.visual_cursor().saturating_sub(scroll);
        let cursor_style = Style::default().fg(theme.background).bg(theme.accent);
        let visible: Vec<char> = value.chars().skip(scroll).collect();

        let before: String = visible.iter().take(cursor_pos).collect();
        let cursor_char: String = visible
            .get(cursor_pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = visible.iter().skip(cursor_pos + 1).collect();

        if value.is_empty() {
            spans.push(Span::styled(cursor_char, cursor_style));
            spans.push(Span::styled(placeholder, Style::default().fg(theme.dimmed)));
        } else {
            if !before.is_empty() {
                spans.push(Span::styled(before, value_style));
            }
            spans.push(Span::styled(cursor_char, cursor_style));
            if !after.is_empty() {
                spans.push(Span::styled(after, value_style));
            }
        }
    } else {
        spans.push(Span::styled(value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
