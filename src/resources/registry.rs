//! In-memory resource broker.
//!
//! [`HandleRegistry`] keeps every live handle's bytes in a map keyed by
//! [`HandleId`]. Hosts without a native object-URL facility (native shells,
//! tests, headless runs) resolve a bound surface's source through
//! [`HandleRegistry::resolve`], which stops returning bytes the moment the
//! handle is released.

use std::collections::HashMap;

use crate::domain::error::Result;
use crate::domain::{MediaBlob, MediaEntry};

use super::broker::ResourceBroker;
use super::handle::{HandleId, PlaybackHandle};

/// URL scheme prefix for handles minted by the registry.
const URL_PREFIX: &str = "blob:mediadeck/";

/// In-memory [`ResourceBroker`] implementation.
#[derive(Debug, Default)]
pub struct HandleRegistry {
    next_id: u64,
    live: HashMap<HandleId, MediaBlob>,
}

impl HandleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes behind a live handle, or `None` once it was released.
    #[must_use]
    pub fn resolve(&self, id: HandleId) -> Option<&MediaBlob> {
        self.live.get(&id)
    }
}

impl ResourceBroker for HandleRegistry {
    fn acquire(&mut self, entry: &MediaEntry) -> Result<PlaybackHandle> {
        self.next_id += 1;
        let id = HandleId(self.next_id);
        self.live.insert(id, entry.blob().clone());

        tracing::trace!(handle = %id, name = %entry.name(), live = self.live.len(), "handle acquired");

        Ok(PlaybackHandle {
            id,
            url: format!("{URL_PREFIX}{}", id.0),
        })
    }

    fn release(&mut self, handle: &PlaybackHandle) -> bool {
        let was_live = self.live.remove(&handle.id).is_some();
        if was_live {
            tracing::trace!(handle = %handle.id, live = self.live.len(), "handle released");
        } else {
            tracing::debug!(handle = %handle.id, "release of inactive handle ignored");
        }
        was_live
    }

    fn is_live(&self, id: HandleId) -> bool {
        self.live.contains_key(&id)
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}
