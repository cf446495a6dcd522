//! View model types representing renderable UI state.
//!
//! View models are produced by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer or by a host that draws its own markup. They
//! carry display-ready data only.
//!
//! # Example
//!
//! ```rust
//! use mediadeck::ui::viewmodel::{FooterInfo, HeaderInfo, PlayerViewModel, PlaylistRow};
//!
//! let vm = PlayerViewModel {
//!     header: HeaderInfo { title: "Playlist (1)".to_string() },
//!     rows: vec![PlaylistRow { index: 0, icon: "🎵", name: "song.mp3".to_string(), is_current: true }],
//!     player_visible: true,
//!     playlist_visible: true,
//!     now_showing: None,
//!     status: None,
//!     footer: FooterInfo { keybindings: "space: play/pause".to_string() },
//!     empty_state: None,
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

use crate::domain::Surface;

/// Everything the view shows, derived from playlist and controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerViewModel {
    /// Playlist header with the entry count.
    pub header: HeaderInfo,

    /// One row per playlist entry, in playlist order.
    pub rows: Vec<PlaylistRow>,

    /// Whether the player section is shown. False while the playlist is empty.
    pub player_visible: bool,

    /// Whether the playlist section is shown. False while the playlist is empty.
    pub playlist_visible: bool,

    /// Surface currently bound to the active entry.
    pub now_showing: Option<SurfaceInfo>,

    /// Transport status line; `None` when nothing is current.
    pub status: Option<StatusInfo>,

    pub footer: FooterInfo,

    /// Shown instead of the sections while the playlist is empty.
    pub empty_state: Option<EmptyState>,
}

/// A single playlist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRow {
    /// Position in the playlist; what row activation and removal refer to.
    pub index: usize,
    /// Kind icon.
    pub icon: &'static str,
    pub name: String,
    /// Whether this row is the cursor entry.
    pub is_current: bool,
}

/// The visible surface and its caption.
///
/// The audio surface shows `title` as its caption; the image surface uses it
/// as alternative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub surface: Surface,
    pub title: String,
}

/// Transport status for the current entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo {
    /// `"{name} ({position}/{total})"`, with a 1-based position.
    pub text: String,
    pub playing: bool,
    /// Whether play/pause, mute, and volume apply to the current entry.
    pub has_transport: bool,
    /// Volume of the visible timed surface.
    pub volume: Option<f64>,
    pub muted: bool,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
