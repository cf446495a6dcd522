//! Playback resource management.
//!
//! Handles are the per-file references a presentation surface binds to. This layer
//! only mints and revokes them; deciding *when* is the playback controller's job.
//!
//! # Modules
//!
//! - `handle`: Handle identity and value types
//! - `broker`: The [`ResourceBroker`] trait hosts implement
//! - `registry`: In-memory broker used by default

pub mod broker;
pub mod handle;
pub mod registry;

pub use broker::ResourceBroker;
pub use handle::{HandleId, PlaybackHandle};
pub use registry::HandleRegistry;
