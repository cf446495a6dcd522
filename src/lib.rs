//! Mediadeck: playlist and playback core for a local media viewer.
//!
//! A user picks or drops local video, audio, and image files; mediadeck keeps
//! them in a circular playlist, decides which of three mutually exclusive
//! surfaces (video, audio, image) presents the current entry, owns the lifetime
//! of the single playback handle bound to that surface, and routes keyboard,
//! pointer, and button input to transport operations.
//!
//! Decoding and drawing stay with the host. The core talks to it through two
//! value types: [`Event`]s in, [`Action`]s out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (page script, native shell, test harness)     │
//! └─────────────────────────────────────────────────────┘
//!          │ Event                          ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Input (input/)  →  Application Layer (app/)        │
//! │  - key/pointer/button routing                       │
//! │  - PlaylistStore, PlaybackController                │
//! │  - view model computation                           │
//! └─────────────────────────────────────────────────────┘
//!          │                    │
//! ┌───────────────┐   ┌──────────────────────┐
//! │ UI (ui/)      │   │ Resources            │
//! │ - view model  │   │ (resources/)         │
//! │ - renderer    │   │ - ResourceBroker     │
//! │ - themes      │   │ - HandleRegistry     │
//! └───────────────┘   └──────────────────────┘
//!          │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): kinds, entries, classifier, errors│
//! └─────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)           optional  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event handling, playlist, and playback state machine
//! - [`domain`]: Media model, classification, and errors
//! - [`resources`]: Playback handle acquisition and release
//! - [`input`]: Host gestures to events
//! - [`ui`]: View model and themed text rendering
//! - [`observability`]: Span export to a rotating JSON-lines file
//!
//! # Configuration
//!
//! Hosts pass settings as string pairs:
//!
//! ```text
//! theme           "daylight"
//! theme_file      "/path/to/theme.toml"
//! trace_level     "debug"
//! trace_file      "/tmp/mediadeck-spans.jsonl"
//! trace_max_bytes "1048576"
//! trace_backups   "2"
//! volume_step     "0.05"
//! ```
//!
//! # Example
//!
//! ```rust
//! use mediadeck::app::{Action, BatchOrigin};
//! use mediadeck::domain::CandidateFile;
//! use mediadeck::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let files = vec![
//!     CandidateFile::new("video1.mp4", vec![0_u8; 16]),
//!     CandidateFile::new("readme.txt", vec![0_u8; 16]),
//!     CandidateFile::new("audio1.mp3", vec![0_u8; 16]),
//! ];
//! let (_, actions) = handle_event(&mut state, &Event::FilesAdded { origin: BatchOrigin::Drop, files })?;
//! assert!(actions.iter().any(|a| matches!(a, Action::Play { .. })));
//!
//! let status = state.compute_viewmodel().status.map(|s| s.text);
//! assert_eq!(status.as_deref(), Some("video1.mp4 (1/2)"));
//! # Ok::<(), mediadeck::MediadeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod input;
pub mod observability;
pub mod resources;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{MediadeckError, Result};
pub use resources::{HandleRegistry, ResourceBroker};
pub use ui::Theme;

use std::collections::BTreeMap;

use app::{PlaybackController, DEFAULT_VOLUME_STEP};
use observability::{DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES};

/// Host-provided settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name (`midnight`, `daylight`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Span filter directive, e.g. `debug` or `mediadeck=trace`. Default: `info`.
    pub trace_level: Option<String>,

    /// Where spans are written. Tracing stays off when unset.
    pub trace_file: Option<String>,

    /// Size at which the trace file rotates.
    pub trace_max_bytes: u64,

    /// Rotated trace files kept.
    pub trace_backups: usize,

    /// Volume change per up/down step, in `(0, 1]`.
    pub volume_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_file: None,
            trace_max_bytes: DEFAULT_MAX_BYTES,
            trace_backups: DEFAULT_MAX_BACKUPS,
            volume_step: DEFAULT_VOLUME_STEP,
        }
    }
}

impl Config {
    /// Parses host key/value settings.
    ///
    /// Missing or unparsable values fall back to their defaults one key at a
    /// time; a volume step outside `(0, 1]` is clamped into it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mediadeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "daylight".to_string());
    /// map.insert("trace_backups".to_string(), "many".to_string());
    /// map.insert("volume_step".to_string(), "0.05".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("daylight"));
    /// assert_eq!(config.trace_backups, 3);
    /// assert!((config.volume_step - 0.05).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let volume_step = config
            .get("volume_step")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|step| step.is_finite())
            .map_or(defaults.volume_step, |step| {
                if step <= 0.0 {
                    tracing::debug!(step, "volume step not positive, using default");
                    defaults.volume_step
                } else {
                    step.min(1.0)
                }
            });

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            trace_file: non_empty("trace_file"),
            trace_max_bytes: config
                .get("trace_max_bytes")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|bytes| *bytes > 0)
                .unwrap_or(defaults.trace_max_bytes),
            trace_backups: config
                .get("trace_backups")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(defaults.trace_backups),
            volume_step,
        }
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates application state backed by the in-memory [`HandleRegistry`].
///
/// Does not install tracing; call [`observability::init_tracing`] first if the
/// host wants spans exported.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    initialize_with_broker(config, Box::new(HandleRegistry::new()))
}

/// Creates application state that acquires playback handles through `broker`.
///
/// Hosts with a native object-URL facility supply their own broker here.
#[must_use]
pub fn initialize_with_broker(config: &Config, broker: Box<dyn ResourceBroker>) -> AppState {
    tracing::debug!(
        theme = ?config.theme_name,
        volume_step = config.volume_step,
        "initializing mediadeck"
    );

    let player = PlaybackController::new(broker, config.volume_step);
    AppState::new(player, config.resolve_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_fall_back_per_key() {
        let config = Config::from_map(&map(&[
            ("trace_level", "debug"),
            ("trace_max_bytes", "0"),
            ("trace_backups", "5"),
            ("theme_file", "   "),
        ]));

        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.trace_max_bytes, DEFAULT_MAX_BYTES);
        assert_eq!(config.trace_backups, 5);
        assert_eq!(config.theme_file, None);
    }

    #[test]
    fn volume_step_is_clamped() {
        let step = |raw: &str| Config::from_map(&map(&[("volume_step", raw)])).volume_step;

        assert!((step("2.5") - 1.0).abs() < f64::EPSILON);
        assert!((step("-0.1") - DEFAULT_VOLUME_STEP).abs() < f64::EPSILON);
        assert!((step("NaN") - DEFAULT_VOLUME_STEP).abs() < f64::EPSILON);
        assert!((step("0.25") - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn theme_resolution_prefers_file_and_falls_back() {
        let named = Config {
            theme_name: Some("daylight".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&named).theme.name, "daylight");

        let unknown = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&unknown).theme, Theme::default());

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let custom = Theme {
            name: "from-file".to_string(),
            ..Theme::default()
        };
        file.write_all(toml::to_string(&custom).expect("serialize").as_bytes())
            .expect("write theme");
        let from_file = Config {
            theme_name: Some("daylight".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&from_file).theme.name, "from-file");

        let missing = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&missing).theme, Theme::default());
    }
}
