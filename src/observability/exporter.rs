//! OpenTelemetry span exporter that appends OTLP/JSON lines to a file.
//!
//! Plugins run in a WASI sandbox without sockets, so spans are written to
//! disk instead of being shipped to a collector.

use super::otlp_json::OtlpJsonEncoder;
use super::rotating_writer::RotatingWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes every exported batch as one JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    writer: RotatingWriter,
    encoder: OtlpJsonEncoder,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

/// Creates a tracer provider exporting synchronously to `file_path`.
///
/// Spans are written as soon as they close; there is no batching thread.
pub fn file_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: RotatingWriter::new(file_path),
        encoder: OtlpJsonEncoder::new(resource.clone(), scope),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "zticker")]);
        let provider = file_tracer_provider(path.clone(), resource, "zticker");

        let tracer = provider.tracer("zticker");
        let mut span = tracer.start("compute_view");
        span.set_attribute(KeyValue::new("page", 2_i64));
        span.end();

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "compute_view");
        assert_eq!(span["attributes"][0]["value"]["intValue"], "2");
    }

    #[test]
    fn shut_down_exporter_rejects_batches() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FileSpanExporter {
            writer: RotatingWriter::new(dir.path().join("spans.json")),
            encoder: OtlpJsonEncoder::new(Resource::empty(), "zticker"),
            is_shutdown: AtomicBool::new(false),
        };

        exporter.shutdown();
        let result = futures_util::FutureExt::now_or_never(exporter.export(vec![]));

        assert!(matches!(result, Some(Err(_))));
        assert!(!dir.path().join("spans.json").exists());
    }
}
