//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces land in `~/.local/share/zellij/scentsphere/scentsphere-otlp.json`
//! - Files rotate at 10 MiB and keep 3 backups
//! - Each line is a standalone OTLP/JSON `resourceSpans` document
//!
//! The level comes from the `trace_level` plugin option (default `info`) and
//! accepts any `EnvFilter` directive, e.g. `scentsphere::search=trace`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, SERVICE_NAME};
