//! Resource broker abstraction.
//!
//! This module defines the [`ResourceBroker`] trait, the seam between the playback
//! core and whatever actually mints references to file bytes. A browser host
//! implements it over `URL.createObjectURL`/`revokeObjectURL`; the crate ships
//! [`HandleRegistry`](super::HandleRegistry) as an in-memory implementation.
//!
//! The broker does not enforce the one-handle-per-surface rule. The playback
//! controller is its only caller and always releases the previous handle before
//! acquiring the next one.

use crate::domain::error::Result;
use crate::domain::MediaEntry;

use super::handle::{HandleId, PlaybackHandle};

/// Creates and revokes per-entry playback handles.
///
/// # Examples
///
/// ```
/// use mediadeck::domain::{MediaBlob, MediaEntry, MediaKind};
/// use mediadeck::resources::{HandleRegistry, ResourceBroker};
///
/// let mut broker = HandleRegistry::new();
/// let entry = MediaEntry::new("clip.mp4".into(), MediaKind::Video, MediaBlob::from(vec![0_u8; 4]));
///
/// let handle = broker.acquire(&entry)?;
/// assert!(broker.is_live(handle.id));
///
/// broker.release(&handle);
/// broker.release(&handle); // second release is a no-op
/// assert_eq!(broker.live_count(), 0);
/// # Ok::<(), mediadeck::MediadeckError>(())
/// ```
pub trait ResourceBroker: Send {
    /// Mints a new handle referencing the entry's bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MediadeckError::Resource`](crate::MediadeckError::Resource) if the
    /// backing host refuses to create a reference.
    fn acquire(&mut self, entry: &MediaEntry) -> Result<PlaybackHandle>;

    /// Invalidates a handle.
    ///
    /// Releasing an already-released or unknown handle is a no-op and must not
    /// affect any other handle. Returns whether the handle was live.
    fn release(&mut self, handle: &PlaybackHandle) -> bool;

    /// Whether the handle with this identity is still live.
    fn is_live(&self, id: HandleId) -> bool;

    /// Number of handles currently outstanding.
    fn live_count(&self) -> usize;
}
