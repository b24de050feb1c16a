//! Built-in colour themes

mod loader;

pub use loader::{load_theme, AVAILABLE_THEMES, DEFAULT_THEME};
