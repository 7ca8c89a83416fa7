use crate::domain::ports::BoxError;
use thiserror::Error;

/// Coarse classification of a [`PaymentError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidData,
    NotConfigured,
    ProviderFault,
    Registration,
    Input,
}

#[derive(Error, Debug)]
pub enum PaymentError {
    /// A provider rejected the operation. `message` is already normalized.
    #[error("{message}")]
    InvalidData {
        message: String,
        code: Option<String>,
    },
    #[error(
        "Unable to retrieve the payment provider with id: {provider_id}\n\
         Please make sure that the provider is registered and configured \
         correctly in your project configuration."
    )]
    ProviderNotConfigured { provider_id: String },
    #[error(transparent)]
    ProviderFault(BoxError),
    #[error("Payment provider registered twice: {0}")]
    DuplicateProvider(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PaymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidData { .. } => ErrorKind::InvalidData,
            Self::ProviderNotConfigured { .. } => ErrorKind::NotConfigured,
            Self::ProviderFault(_) => ErrorKind::ProviderFault,
            Self::DuplicateProvider(_) => ErrorKind::Registration,
            Self::InvalidCommand(_) => ErrorKind::Input,
            Self::CsvError(_) | Self::IoError(_) | Self::JsonError(_) => ErrorKind::Input,
        }
    }

    /// Provider-supplied classification token, e.g. `card_declined`.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::InvalidData { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
