//! Tracing initialization and subscriber setup.

use super::exporter::file_tracer_provider;
use crate::domain::Result;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name recorded on every span.
pub const SERVICE_NAME: &str = "zticker";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` feeding an OpenTelemetry layer that writes OTLP/JSON
/// to [`paths::trace_file`].
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns [`crate::TickerError::Io`] if the data directory cannot be
/// created.
pub fn init_tracing(config: &Config) -> Result<()> {
    std::fs::create_dir_all(paths::get_data_dir())?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(paths::trace_file(), resource, SERVICE_NAME);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter(&config.trace_level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();

    Ok(())
}

/// Parses a filter directive, falling back to `info` when it is invalid.
fn filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}
