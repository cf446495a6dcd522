//! Tracing subscriber setup.

use std::path::Path;

use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter;
use super::rotating::RotatingWriter;
use crate::Config;

const SERVICE_NAME: &str = "mediadeck";

/// Installs the global tracing subscriber when `config.trace_file` is set.
///
/// Spans pass an [`EnvFilter`] built from `config.trace_level` (default `info`)
/// and are exported as JSON lines to the trace file, which rotates at
/// `config.trace_max_bytes` keeping `config.trace_backups` old files.
///
/// Returns `true` if this call installed the subscriber. Without a trace file,
/// or when a global subscriber already exists, nothing changes and `false` is
/// returned, so calling it repeatedly is harmless.
///
/// # Example
///
/// ```rust
/// use mediadeck::observability::init_tracing;
/// use mediadeck::Config;
///
/// // No trace file: the host keeps whatever subscriber it installed.
/// assert!(!init_tracing(&Config::default()));
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let Some(trace_file) = config.trace_file.as_deref() else {
        return false;
    };

    if let Some(parent) = Path::new(trace_file).parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let writer = RotatingWriter::new(trace_file, config.trace_max_bytes, config.trace_backups);
    let provider = exporter::create_tracer_provider(SERVICE_NAME, writer);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init()
        .is_ok()
}
