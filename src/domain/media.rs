//! Media domain model.
//!
//! Defines the closed set of media kinds, the three presentation surfaces, and the
//! entry type held by the playlist. Entries are immutable once created: the playlist
//! owns them exclusively and only ever moves or drops them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Classified media category of a file, derived from its name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    Unknown,
}

impl MediaKind {
    /// Returns the presentation surface that displays this kind.
    ///
    /// `Unknown` has no surface: such an entry stays navigable but nothing is shown.
    #[must_use]
    pub const fn surface(self) -> Option<Surface> {
        match self {
            Self::Video => Some(Surface::Video),
            Self::Audio => Some(Surface::Audio),
            Self::Image => Some(Surface::Image),
            Self::Unknown => None,
        }
    }

    /// Whether this kind has transport (play/pause, mute, volume, end-of-media).
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::Video | Self::Audio)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One of the three mutually exclusive presentation regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Video,
    Audio,
    Image,
}

/// Shared, immutable reference to a file's raw bytes.
///
/// Cloning is cheap; the bytes themselves are never copied once read.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaBlob(Arc<[u8]>);

impl MediaBlob {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MediaBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBlob").field("len", &self.0.len()).finish()
    }
}

impl From<Vec<u8>> for MediaBlob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl From<&[u8]> for MediaBlob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

/// A file offered by the picker or the drop target, before admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub blob: MediaBlob,
}

impl CandidateFile {
    #[must_use]
    pub fn new(name: impl Into<String>, blob: impl Into<MediaBlob>) -> Self {
        Self {
            name: name.into(),
            blob: blob.into(),
        }
    }
}

/// One playlist item wrapping an admitted media file.
///
/// Fields are private so an entry cannot be altered after the playlist accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    name: String,
    kind: MediaKind,
    blob: MediaBlob,
}

impl MediaEntry {
    #[must_use]
    pub const fn new(name: String, kind: MediaKind, blob: MediaBlob) -> Self {
        Self { name, kind, blob }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub const fn blob(&self) -> &MediaBlob {
        &self.blob
    }
}
