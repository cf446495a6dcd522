//! Application layer: playlist, playback, and event dispatch.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Host input → Event → handle_event → PlaylistStore / PlaybackController → Actions → Host
//!                                              │
//!                                              └──→ compute_viewmodel → renderer
//! ```
//!
//! Platform reports (playback refused, media ended, fullscreen changed) re-enter
//! through the same [`handle_event`] as ordinary events.
//!
//! # Modules
//!
//! - [`playlist`]: Ordered entries and the cursor invariant
//! - [`controller`]: Surface selection, handle lifetimes, and transport
//! - [`modes`]: Playback state machine and per-surface output levels
//! - [`actions`]: Side effects the host performs
//! - [`handler`]: Event processing
//! - [`state`]: State container and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod playlist;
pub mod state;

pub use actions::{Action, FullscreenTarget};
pub use controller::{PlaybackController, DEFAULT_VOLUME_STEP};
pub use handler::{handle_event, BatchOrigin, Event};
pub use modes::{OutputLevel, PlaybackState};
pub use playlist::{PlaylistStore, Removal};
pub use state::AppState;
