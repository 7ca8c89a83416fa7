//! Diagnostics sink handed to the dispatcher at construction.

use std::error::Error;
use std::io::IsTerminal;

pub trait Logger: Send + Sync {
    fn error(&self, message: &str, cause: &(dyn Error + 'static));
    fn debug(&self, message: &str);
}

/// Forwards to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str, cause: &(dyn Error + 'static)) {
        tracing::error!(error = %cause, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn error(&self, _message: &str, _cause: &(dyn Error + 'static)) {}

    fn debug(&self, _message: &str) {}
}

/// Installs a stderr fmt subscriber. Later calls are ignored.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
