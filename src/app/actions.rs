//! Actions representing side effects the host performs on its surfaces.
//!
//! The event handler never touches a surface directly. It returns a `Vec<Action>`
//! after processing each event, and the host executes them in order against its
//! video, audio, and image regions, its file picker, and its fullscreen API.
//!
//! Asynchronous results of those side effects (a playback start being refused,
//! media reaching its end, a fullscreen request being denied) come back as
//! [`Event`](crate::app::Event)s tagged with the [`HandleId`] they concern.
//!
//! # Example
//!
//! ```rust
//! use mediadeck::app::Action;
//! use mediadeck::domain::Surface;
//! use mediadeck::resources::{HandleId, PlaybackHandle};
//!
//! let handle = PlaybackHandle { id: HandleId(1), url: "blob:mediadeck/1".into() };
//! let actions = vec![
//!     Action::HideSurfaces,
//!     Action::Present { surface: Surface::Video, source: handle.clone(), title: "clip.mp4".into() },
//!     Action::Play { surface: Surface::Video, handle: handle.id },
//! ];
//! assert_eq!(actions.len(), 3);
//! ```

use crate::domain::Surface;
use crate::resources::{HandleId, PlaybackHandle};

/// Element a fullscreen request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    /// The region of a single surface (video or image).
    Surface(Surface),
    /// The whole view.
    Document,
}

/// Commands for the host to execute, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hide all three surfaces and detach their sources.
    ///
    /// Always precedes a [`Action::Present`], and is emitted alone when the
    /// playlist becomes empty.
    HideSurfaces,

    /// Bind a handle to a surface and make that surface visible.
    ///
    /// `title` is the entry name: the audio surface shows it as its caption and
    /// the image surface uses it as alternative text.
    Present {
        surface: Surface,
        source: PlaybackHandle,
        title: String,
    },

    /// Attempt to start playback on a timed surface.
    ///
    /// Fire-and-forget: the host answers later with `PlaybackStarted` or
    /// `PlaybackRejected` carrying the same handle.
    Play { surface: Surface, handle: HandleId },

    /// Pause playback on a timed surface.
    Pause { surface: Surface, handle: HandleId },

    /// Set the muted flag of a timed surface.
    SetMuted { surface: Surface, muted: bool },

    /// Set the volume of a timed surface, in `[0.0, 1.0]`.
    SetVolume { surface: Surface, volume: f64 },

    /// Ask the platform to enter fullscreen on the target.
    RequestFullscreen(FullscreenTarget),

    /// Leave fullscreen.
    ExitFullscreen,

    /// Open the file-selection dialog.
    OpenFilePicker,

    /// Reset the file-selection control so the same files can be picked again.
    ResetFilePicker,

    /// Scroll the playlist row at this index into view.
    ScrollIntoView(usize),
}
