//! Theme management and ANSI escape sequence generation.
//!
//! Two themes ship with the plugin and custom ones can be loaded from TOML.
//!
//! # Built-in Themes
//!
//! - `rose-noir`: Dark theme in dusky rose and plum (default)
//! - `aether-dawn`: Light theme in warm cream and berry
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f4c7d3"
//! tagline_fg = "#b49aa8"
//! text_normal = "#ece3e8"
//! text_dim = "#7d6b76"
//! border = "#3e2f38"
//! search_bar_border = "#d9829b"
//! placeholder_fg = "#6f5d68"
//! spinner_fg = "#f2b880"
//! selection_fg = "#1c1418"
//! selection_bg = "#d9829b"
//! brand_fg = "#c7a3b5"
//! tag_fg = "#1c1418"
//! tag_bg = "#b89ec4"
//! link_fg = "#8fc1d4"
//! skeleton_fg = "#3e2f38"
//! error_fg = "#fbe9ec"
//! error_bg = "#8c2f45"
//! empty_state_fg = "#f2b880"
//! dot_active = "#f4c7d3"
//! dot_inactive = "#4f3f48"
//! ```
//!
//! `header_bg` is optional.

use crate::domain::{Result, ScentSphereError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "rose-noir";

const ROSE_NOIR: &str = include_str!("../../themes/rose-noir.toml");
const AETHER_DAWN: &str = include_str!("../../themes/aether-dawn.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#f4c7d3"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,
    pub tagline_fg: String,

    pub text_normal: String,
    /// Footer, prompt, and other secondary text.
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    pub placeholder_fg: String,
    pub spinner_fg: String,

    /// Selected card title.
    pub selection_fg: String,
    pub selection_bg: String,
    pub brand_fg: String,
    pub tag_fg: String,
    pub tag_bg: String,
    pub link_fg: String,

    /// Placeholder bars while loading.
    pub skeleton_fg: String,

    pub error_fg: String,
    pub error_bg: String,
    pub empty_state_fg: String,

    /// Carousel indicator for the active image.
    pub dot_active: String,
    pub dot_inactive: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    ///
    /// ```
    /// use scentsphere::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("aether-dawn").unwrap();
    /// assert_eq!(theme.name, "aether-dawn");
    /// assert!(Theme::from_name("catppuccin").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "rose-noir" => ROSE_NOIR,
            "aether-dawn" => AETHER_DAWN,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScentSphereError::Theme`] when the file cannot be read or
    /// does not parse as a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ScentSphereError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| ScentSphereError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```
    /// use scentsphere::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `rose-noir` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("bundled rose-noir theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn bundled_themes_parse() {
        let rose = Theme::from_name("rose-noir").unwrap();
        let dawn = Theme::from_name("aether-dawn").unwrap();

        assert_eq!(rose.colors.header_bg, None);
        assert_eq!(dawn.colors.header_bg.as_deref(), Some("#f7ede6"));
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = ROSE_NOIR.replace("name = \"rose-noir\"", "name = \"vetiver\"");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "vetiver");
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScentSphereError::Theme(_)));
    }

    #[test]
    fn missing_theme_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("pink"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#00ff0"), "\u{1b}[48;2;255;255;255m");
    }
}
