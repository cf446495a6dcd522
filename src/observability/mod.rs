//! Span export to a local JSON-lines file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → JsonLinesExporter → rotating file
//! ```
//!
//! Observability is optional. Without `trace_file` in [`Config`](crate::Config)
//! nothing is installed and the host is free to install its own subscriber.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: Tracer provider and span exporter
//! - `record`: Per-span JSON record
//! - `rotating`: Size-rotated file writer

mod exporter;
pub mod init;
mod record;
mod rotating;

pub use init::init_tracing;
pub use record::{EventRecord, SpanRecord};
pub use rotating::{RotatingWriter, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES};
