//! Background worker for DAO loading.
//!
//! The plugin posts [`WorkerMessage`]s to a Zellij worker thread, which reads
//! the DAO cache and answers with [`WorkerResponse`]s. Messages carry trace
//! context so worker spans join the plugin's traces.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker state and message processing

pub mod handler;
pub mod messages;

pub use handler::DaoSpacesWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
