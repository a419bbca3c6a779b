//! Error sinks
//!
//! Failed requests do not surface as `Err`; their response text is handed to
//! an [`ErrorLogger`] instead. [`NullLogger`] discards everything and is used
//! whenever the caller does not supply a logger.

/// Receives the error text of failed requests.
pub trait ErrorLogger: Send + Sync {
    fn log_error(&self, error: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Shared instance, handy where a `&dyn ErrorLogger` is needed.
    pub const INSTANCE: &'static NullLogger = &NullLogger;
}

impl ErrorLogger for NullLogger {
    fn log_error(&self, _error: &str) {}
}

/// Forwards messages to `tracing` at error level.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    source: Option<String>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag each event with a `source` field.
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }
}

impl ErrorLogger for TracingLogger {
    fn log_error(&self, error: &str) {
        match &self.source {
            Some(source) => tracing::error!(source = %source, error = %error, "request failed"),
            None => tracing::error!(error = %error, "request failed"),
        }
    }
}

impl<F> ErrorLogger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log_error(&self, error: &str) {
        self(error)
    }
}
