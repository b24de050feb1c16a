use crate::tui::styles::Theme;
use tracing::warn;

pub const DEFAULT_THEME: &str = "phosphor";

pub const AVAILABLE_THEMES: &[&str] = &["phosphor", "tokyo-night"];

const PHOSPHOR_TOML: &str = include_str!("phosphor.toml");
const TOKYO_NIGHT_TOML: &str = include_str!("tokyo-night.toml");

pub fn load_theme(name: &str) -> Theme {
    let toml_str = match name {
        "phosphor" => PHOSPHOR_TOML,
        "tokyo-night" => TOKYO_NIGHT_TOML,
        _ => {
            warn!("Unknown theme '{}', falling back to {}", name, DEFAULT_THEME);
            PHOSPHOR_TOML
        }
    };

    match toml::from_str(toml_str) {
        Ok(theme) => theme,
        Err(e) => {
            warn!(
                "Failed to parse theme '{}': {}, using default {}",
                name, e, DEFAULT_THEME
            );
            Theme::phosphor()
        }
    }
}
