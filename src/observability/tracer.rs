//! Tracer provider backed by a local OTLP JSON file.
//!
//! The plugin sandbox has no collector to talk to, so spans are exported
//! synchronously, one batch per line, into a rotating file.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::{self, BoxFuture};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;

/// Span exporter that appends OTLP JSON documents to a file.
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("file exporter is shut down"))
        } else {
            let document = self.formatter.format_batch(&batch);
            self.writer
                .write_line(&document.to_string())
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }
}

/// Builds a provider whose spans land in `file_path` under `resource`.
///
/// `scope` names the instrumentation scope written into every batch.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: FileWriter::new(file_path),
        formatter: SpanFormatter::new(resource.clone(), scope),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
