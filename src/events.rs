//! Diagnostics sink passed into operations that report progress or warnings.
//!
//! Operations never touch a process-global logger directly. Callers hand in an
//! [`EventSink`]; the provided [`LogSink`] forwards to the `log` facade and
//! [`SilentSink`] discards everything.

/// Receiver for diagnostic messages emitted during an operation.
pub trait EventSink {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that forwards all messages to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Sink that discards all messages. Handy for tests and batch use.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl EventSink for SilentSink {
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
