//! Link to the embedding host.
//!
//! When the plugin is launched through a Zellij CLI pipe
//! (`zellij pipe --plugin ... select-space`), the pipe acts as the host: it
//! waits for the chosen DAO and the plugin replies on the same pipe. A plugin
//! opened any other way has no host.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostLink {
    pipe_id: Option<String>,
}

impl HostLink {
    #[must_use]
    pub fn attached(pipe_id: impl Into<String>) -> Self {
        Self {
            pipe_id: Some(pipe_id.into()),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.pipe_id.is_some()
    }

    #[must_use]
    pub fn pipe_id(&self) -> Option<&str> {
        self.pipe_id.as_deref()
    }

    /// Drops the link after the host got its answer.
    pub fn detach(&mut self) -> Option<String> {
        self.pipe_id.take()
    }
}
