//! Worker thread implementation for DAO loading.
//!
//! File I/O and JSON parsing run here so the plugin render loop never blocks.
//! The Zellij worker trait itself is implemented in the plugin binary; this
//! type only turns payloads into responses.

use crate::domain::error::{DaoListError, Result};
use crate::infrastructure::paths;
use crate::storage::{DaoSource, JsonDaoSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Worker state. The data source is created lazily on the first message.
#[derive(Serialize, Deserialize, Default)]
pub struct DaoSpacesWorker {
    #[serde(skip)]
    source: Option<Box<dyn DaoSource>>,

    /// Path the current source reads from; a different `data_file` in a
    /// request replaces the source.
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl DaoSpacesWorker {
    /// Creates a worker reading from a custom source.
    #[must_use]
    pub fn with_source(source: Box<dyn DaoSource>) -> Self {
        Self {
            source: Some(source),
            source_path: None,
        }
    }

    fn source_for(&mut self, data_file: Option<&str>) -> Result<&mut Box<dyn DaoSource>> {
        if self.source.is_some() && self.source_path.is_none() {
            return self
                .source
                .as_mut()
                .ok_or_else(|| DaoListError::Worker("Source not initialized".to_string()));
        }

        let path = paths::default_data_file(data_file);
        if self.source_path.as_ref() != Some(&path) {
            tracing::debug!(path = ?path, "opening dao source");
            self.source = Some(Box::new(JsonDaoSource::new(path.clone())));
            self.source_path = Some(path);
        }

        self.source
            .as_mut()
            .ok_or_else(|| DaoListError::Worker("Source not initialized".to_string()))
    }

    fn handle_load_daos(&mut self, data_file: Option<&str>, force: bool) -> WorkerResponse {
        match self.source_for(data_file).and_then(|source| source.load(force)) {
            Ok(snapshot) => {
                tracing::debug!(
                    dao_count = snapshot.daos.len(),
                    updated_at = snapshot.updated_at,
                    "daos loaded"
                );
                WorkerResponse::DaosLoaded {
                    daos: snapshot.daos,
                    updated_at: snapshot.updated_at,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "load daos failed");
                WorkerResponse::Error {
                    message: format!("load daos: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);
        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadDaos { data_file, force, .. } => {
                self.handle_load_daos(data_file.as_deref(), force)
            }
        }
    }

    /// Decodes a JSON payload, handles it, and encodes the response.
    ///
    /// Returns `None` when the payload is not a worker message or the response
    /// cannot be serialized; both are logged.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let message: WorkerMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);
        serde_json::to_string(&response)
            .map_err(|e| tracing::debug!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}
