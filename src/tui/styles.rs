//! TUI theme and styling

use ratatui::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub focus_border: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,
    pub number: Color,

    // Buttons
    pub primary: Color,
    pub warning: Color,
    pub success: Color,
    pub error: Color,

    // UI elements
    pub accent: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            focus_border: Color::Rgb(57, 255, 20),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),
            number: Color::Rgb(0, 255, 180),

            primary: Color::Rgb(130, 170, 255),
            warning: Color::Rgb(255, 180, 60),
            success: Color::Rgb(100, 220, 160),
            error: Color::Rgb(255, 100, 80),

            accent: Color::Rgb(57, 255, 20),
            info: Color::Rgb(180, 255, 200),
        }
    }
}
