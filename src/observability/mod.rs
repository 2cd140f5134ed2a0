//! OpenTelemetry-based observability with file-based trace export.
//!
//! `tracing` spans and events are bridged into OpenTelemetry and written to
//! disk as OTLP/JSON, one batch per line:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: `~/.local/share/zellij/zticker/zticker-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10 MiB with 3 backups retained
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (default `"info"`)
//! and accepts any `EnvFilter` directive, e.g. `zticker=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp_json`]: OTLP/JSON span encoding
//! - [`rotating_writer`]: Size-based file rotation

mod exporter;
mod init;
mod otlp_json;
mod rotating_writer;

pub use init::{init_tracing, SERVICE_NAME};
