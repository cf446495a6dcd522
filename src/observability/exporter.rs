//! Span exporter writing one JSON line per span to a rotating file.

use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::KeyValue;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::record::SpanRecord;
use super::rotating::RotatingWriter;

/// Writes each exported span as a [`SpanRecord`] line.
struct JsonLinesExporter {
    service: String,
    writer: RotatingWriter,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    fn new(service: String, writer: RotatingWriter) -> Self {
        Self {
            service,
            writer,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        for span in batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("service", &self.service)
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports every finished span immediately.
pub fn create_tracer_provider(service: &str, writer: RotatingWriter) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", service.to_string())]);
    let exporter = JsonLinesExporter::new(service.to_string(), writer);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
