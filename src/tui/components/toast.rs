//! Transient notification shown above the input area

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use crate::tui::styles::Theme;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }

    fn color(&self, theme: &Theme) -> Color {
        match self.severity {
            Severity::Info => theme.info,
            Severity::Warning => theme.warning,
            Severity::Error => theme.error,
        }
    }

    /// Message width plus borders and padding, clamped to `max`.
    fn box_width(&self, max: u16) -> u16 {
        u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max)
    }

    /// Renders the toast centered at the bottom of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.width < 8 || area.height < 3 {
            return;
        }

        let width = self.box_width(area.width);
        let height = 3;
        let toast_area = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + area.height - height,
            width,
            height,
        );

        frame.render_widget(Clear, toast_area);

        let color = self.color(theme);
        let toast = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(color).bold())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(theme.background)),
            );

        frame.render_widget(toast, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::new("hello", Severity::Info);
        assert!(!toast.is_expired(Instant::now()));
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let toast = Toast::new("hello", Severity::Warning);
        let later = Instant::now() + TOAST_DURATION + Duration::from_millis(1);
        assert!(toast.is_expired(later));
    }

    #[test]
    fn test_box_width_clamps_huge_messages() {
        let toast = Toast::new("x".repeat(70_000), Severity::Info);
        assert_eq!(toast.box_width(80), 80);
        assert_eq!(Toast::new("hello", Severity::Info).box_width(80), 9);
    }

    #[test]
    fn test_render_huge_message_fits_area() {
        use ratatui::backend::TestBackend;

        let toast = Toast::new("/".repeat(70_000), Severity::Error);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| toast.render(f, f.area(), &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 9)].symbol(), "└");
    }

    #[test]
    fn test_severity_picks_theme_color() {
        let theme = Theme::phosphor();
        assert_eq!(Toast::new("x", Severity::Info).color(&theme), theme.info);
        assert_eq!(
            Toast::new("x", Severity::Warning).color(&theme),
            theme.warning
        );
        assert_eq!(Toast::new("x", Severity::Error).color(&theme), theme.error);
    }
}
