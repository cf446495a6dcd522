//! Playback state types.
//!
//! The controller runs a small state machine per active entry:
//!
//! ```text
//!            play_at                     toggle / PlaybackPaused / rejected start
//!   Idle ───────────────▶ Playing(kind) ◀──────────────────────────▶ Paused(kind)
//!    ▲                        │                                          │
//!    └──────── stop ──────────┴──────────────────────────────────────────┘
//! ```
//!
//! `Idle` holds exactly when nothing is current (the playlist is empty). Image and
//! unknown entries enter `Playing` once presented and never leave it through
//! transport, since they have none.

use crate::domain::MediaKind;

/// Playback state of the active entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(MediaKind),
    Paused(MediaKind),
}

impl PlaybackState {
    /// Kind of the active entry, `None` when idle.
    #[must_use]
    pub const fn kind(self) -> Option<MediaKind> {
        match self {
            Self::Idle => None,
            Self::Playing(kind) | Self::Paused(kind) => Some(kind),
        }
    }

    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing(_))
    }
}

/// Per-surface audio output settings.
///
/// Video and audio surfaces keep separate settings that persist across entries,
/// the way two distinct media elements would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputLevel {
    /// Volume in `[0.0, 1.0]`.
    pub volume: f64,
    pub muted: bool,
}

impl Default for OutputLevel {
    fn default() -> Self {
        Self {
            volume: 1.0,
            muted: false,
        }
    }
}
