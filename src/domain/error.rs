//! Error types for the mediadeck core.
//!
//! This module defines the centralized error type [`MediadeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Most failure modes
//! of the playback core are deliberately *not* errors: unsupported files are filtered,
//! rejected playback and denied fullscreen requests are logged, and out-of-range
//! indices are no-ops. What remains here is configuration, theming, I/O, and resource
//! acquisition failures reported by a [`ResourceBroker`](crate::resources::ResourceBroker).

use thiserror::Error;

/// The main error type for mediadeck operations.
///
/// # Examples
///
/// ```
/// use mediadeck::MediadeckError;
///
/// fn validate_step(step: f64) -> Result<f64, MediadeckError> {
///     if step <= 0.0 {
///         return Err(MediadeckError::Config(format!("volume step must be positive, got {step}")));
///     }
///     Ok(step)
/// }
///
/// assert!(validate_step(0.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum MediadeckError {
    /// Configuration value is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A playback handle could not be created for an entry.
    ///
    /// Raised by broker implementations backed by a host that can refuse to
    /// mint a reference (for example when the underlying blob was discarded).
    #[error("Resource error: {0}")]
    Resource(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for mediadeck operations.
pub type Result<T> = std::result::Result<T, MediadeckError>;
