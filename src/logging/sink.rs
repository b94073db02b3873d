//! Sink through which operator-facing messages are reported

#[cfg(test)]
use mockall::automock;

/// Destination for operator-facing log lines
///
/// Mirrors the three levels a plugin host exposes: informational, warning and
/// severe.
#[cfg_attr(test, automock)]
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn severe(&self, message: &str);
}

/// Sink that forwards every line to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn severe(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
