//! Playback handle types.
//!
//! A [`PlaybackHandle`] is the only thing a presentation surface is ever given: a
//! revocable reference to an entry's bytes. Handles carry an identity so that
//! asynchronous platform callbacks can be matched against the handle that is
//! currently active, and late callbacks for a superseded handle can be dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a playback handle.
///
/// Identities are never reused within one broker, so a stale identity can never
/// alias a newer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandleId(pub u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live, revocable reference to an entry's bytes.
///
/// `url` is what the host binds to a surface's source (an object URL in a
/// browser). After the broker releases the handle the URL must not be
/// dereferenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackHandle {
    pub id: HandleId,
    pub url: String,
}
