//! TUI components

mod button;
mod help;
mod text_input;
mod toast;

pub use button::render_button;
pub use help::HelpOverlay;
pub use text_input::render_text_field;
pub use toast::{Severity, Toast};
