//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → daospaces-otlp.json
//! ```
//!
//! Spans land in `~/.local/share/zellij/daospaces/daospaces-otlp.json` as one
//! OTLP/JSON document per line. The file rotates at 10 MiB and keeps three
//! numbered backups. The level comes from the `trace_level` plugin option
//! (default `info`) and accepts any `EnvFilter` directive.
//!
//! # Usage
//!
//! ```rust
//! use daospaces::observability::init_tracing;
//! use daospaces::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
