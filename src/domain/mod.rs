//! Domain layer: media model, classification, and errors.
//!
//! Nothing in here knows about surfaces being shown, handles being live, or a
//! host being present. It is the vocabulary the rest of the crate speaks.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`media`]: Media kinds, surfaces, blobs, and playlist entries
//! - [`classifier`]: Extension-based kind lookup and admission filter

pub mod classifier;
pub mod error;
pub mod media;

pub use classifier::{classify, icon_for, is_acceptable};
pub use error::{MediadeckError, Result};
pub use media::{CandidateFile, MediaBlob, MediaEntry, MediaKind, Surface};
