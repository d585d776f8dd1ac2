//! Tracing subscriber setup.

use super::tracer;
use crate::domain::Result;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name recorded on every exported span.
pub const SERVICE_NAME: &str = "ScentSphere";

/// Level used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber: level filter → OpenTelemetry → OTLP file.
///
/// Spans go to `~/.local/share/zellij/scentsphere/scentsphere-otlp.json`
/// (`/host/...` inside the sandbox). Only the first call installs anything;
/// later calls are no-ops.
///
/// # Errors
///
/// Returns [`crate::ScentSphereError::Io`] when the data directory cannot be
/// created. The plugin keeps running without traces in that case.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    std::fs::create_dir_all(paths::get_data_dir())?;

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(paths::otlp_export_path(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));
    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();

    tracing::debug!(trace_level = level, "tracing initialized");
    Ok(())
}
