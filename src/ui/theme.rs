//! Themes and ANSI escape sequence generation.
//!
//! Built-in themes are TOML documents compiled into the crate; custom themes are
//! read from a TOML file with the same shape.
//!
//! # Built-in Themes
//!
//! - `midnight`: dark palette (default)
//! - `daylight`: light palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0def4"
//! header_bg = "#232136"      # optional
//! current_fg = "#232136"
//! current_bg = "#c4a7e7"
//! text_normal = "#e0def4"
//! text_dim = "#6e6a86"
//! border = "#393552"
//! status_fg = "#9ccfd8"
//! remove_fg = "#eb6f92"
//! empty_state_fg = "#c4a7e7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use mediadeck::ui::Theme;
//!
//! let theme = Theme::from_name("daylight").unwrap_or_default();
//! let line = format!("{}{}Now showing{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(line.ends_with("\u{1b}[0m"));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::{MediadeckError, Result};

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "midnight";

/// Colour scheme for the text renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Colours for every rendered element, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlight for the current playlist row.
    pub current_fg: String,
    pub current_bg: String,

    pub text_normal: String,
    /// Footer hints and secondary text.
    pub text_dim: String,

    pub border: String,

    /// Status line (name, position, playback flags).
    pub status_fg: String,

    /// Per-row remove marker.
    pub remove_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "midnight" => include_str!("../../themes/midnight.toml"),
            "daylight" => include_str!("../../themes/daylight.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!(theme = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MediadeckError::Theme`] if the file cannot be read or does not
    /// describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| MediadeckError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| MediadeckError::Theme(format!("cannot parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (or `rrggbb`). Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        channel(0..2)
            .zip(channel(2..4))
            .zip(channel(4..6))
            .map_or((255, 255, 255), |((r, g), b)| (r, g, b))
    }

    /// 24-bit foreground escape for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex colour.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }

    /// Palette used if the embedded default ever fails to parse.
    fn fallback() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: "#e0def4".to_string(),
                header_bg: None,
                current_fg: "#232136".to_string(),
                current_bg: "#c4a7e7".to_string(),
                text_normal: "#e0def4".to_string(),
                text_dim: "#6e6a86".to_string(),
                border: "#393552".to_string(),
                status_fg: "#9ccfd8".to_string(),
                remove_fg: "#eb6f92".to_string(),
                empty_state_fg: "#c4a7e7".to_string(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}
