use crate::logging::{Logger, NoopLogger, TracingLogger};
use serde::Deserialize;
use std::sync::Arc;

/// Which diagnostics sink the dispatcher writes to.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggerChoice {
    #[default]
    Tracing,
    Noop,
}

impl LoggerChoice {
    pub fn build(self) -> Arc<dyn Logger> {
        match self {
            Self::Tracing => Arc::new(TracingLogger),
            Self::Noop => Arc::new(NoopLogger),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct DispatcherConfig {
    pub logger: LoggerChoice,
    /// `EnvFilter` directive used when the tracing subscriber is installed.
    pub log_filter: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            logger: LoggerChoice::Tracing,
            log_filter: "warn".to_string(),
        }
    }
}
