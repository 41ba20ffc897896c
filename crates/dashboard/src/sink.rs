//! Error sink for non-fatal layout failures
//!
//! Layout operations never fail their caller. Whatever goes wrong is handed
//! to an [`ErrorSink`] and the operation ends there.

use log::error;

/// Receiver for errors swallowed by layout operations
pub trait ErrorSink: Send + Sync {
    /// Record a failure
    ///
    /// # Arguments
    /// * `context` - Which operation failed, e.g. "organization list"
    /// * `error` - The underlying error chain
    fn report(&self, context: &str, error: &anyhow::Error);
}

/// Sink that writes every failure to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, context: &str, error: &anyhow::Error) {
        error!("Error while fetching {}: {:#}", context, error);
    }
}

impl<F> ErrorSink for F
where
    F: Fn(&str, &anyhow::Error) + Send + Sync,
{
    fn report(&self, context: &str, error: &anyhow::Error) {
        self(context, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |context: &str, error: &anyhow::Error| {
            seen.lock().unwrap().push(format!("{}: {}", context, error));
        };

        sink.report("quota threshold", &anyhow::anyhow!("boom"));
        assert_eq!(seen.lock().unwrap().as_slice(), ["quota threshold: boom"]);
    }

    #[test]
    fn test_log_sink_does_not_panic() {
        LogErrorSink.report("refresh token", &anyhow::anyhow!("offline"));
    }
}
