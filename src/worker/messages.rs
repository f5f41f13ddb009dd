//! Worker thread message types.
//!
//! The plugin asks the worker for DAO data with [`WorkerMessage`] and receives
//! a [`WorkerResponse`]. Both travel as JSON through Zellij's plugin messages.
//! Requests carry a [`TraceContext`] so worker spans nest under the plugin span
//! that caused them.

use crate::domain::Dao;
use serde::{Deserialize, Serialize};

/// W3C-style identifiers of the span that posted a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// 32 hex characters.
    pub trace_id: String,
    /// 16 hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the current span's OpenTelemetry context, if it is valid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Reads the DAO list from the data source.
    ///
    /// `data_file` overrides the default cache location. `force` bypasses the
    /// unchanged-file shortcut so a manual refresh always re-reads.
    LoadDaos {
        data_file: Option<String>,
        force: bool,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds a `LoadDaos` request tagged with the current trace context.
    #[must_use]
    pub fn load_daos(data_file: Option<String>, force: bool) -> Self {
        Self::LoadDaos {
            data_file,
            force,
            trace_context: TraceContext::from_current(),
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadDaos { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Snapshot of the data source. `updated_at` is a Unix timestamp.
    DaosLoaded { daos: Vec<Dao>, updated_at: i64 },

    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_message_without_active_span_has_no_trace_context() {
        let message = WorkerMessage::load_daos(Some("/tmp/daos.json".to_string()), true);
        assert!(message.trace_context().is_none());

        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
        assert_eq!(serde_json::from_str::<WorkerMessage>(&json).unwrap(), message);
    }

    #[test]
    fn response_carries_daos_as_backend_json() {
        let response = WorkerResponse::DaosLoaded {
            daos: vec![Dao::new("0xA", "Alpha")],
            updated_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("daoAddress"));
    }
}
