use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-owned session payload. Opaque to the dispatcher.
pub type SessionData = serde_json::Map<String, serde_json::Value>;

/// Caller-supplied context forwarded to authorization (customer, cart, ...).
pub type PaymentContext = serde_json::Map<String, serde_json::Value>;

/// Status of a payment session as reported by its provider.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSessionStatus {
    Pending,
    RequiresMore,
    Authorized,
    Captured,
    Canceled,
    Error,
}

impl PaymentSessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::RequiresMore => "requires_more",
            Self::Authorized => "authorized",
            Self::Captured => "captured",
            Self::Canceled => "canceled",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for PaymentSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating or updating a payment session.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SessionInput {
    pub amount: Decimal,
    pub currency_code: String,
    /// Data from a previous provider call, if any.
    #[serde(default)]
    pub data: SessionData,
    #[serde(default)]
    pub context: PaymentContext,
}

impl SessionInput {
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
            data: SessionData::new(),
            context: PaymentContext::new(),
        }
    }

    pub fn with_data(mut self, data: SessionData) -> Self {
        self.data = data;
        self
    }

    pub fn with_context(mut self, context: PaymentContext) -> Self {
        self.context = context;
        self
    }
}

/// Success payload returned by a provider capability.
///
/// `status` is optional here; the dispatcher only hands `data` back to callers
/// for everything except authorization.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ProviderOutput {
    pub data: SessionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentSessionStatus>,
}

impl ProviderOutput {
    pub fn new(data: SessionData) -> Self {
        Self { data, status: None }
    }

    pub fn with_status(mut self, status: PaymentSessionStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Result of a successful authorization: both the data and the new status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AuthorizedSession {
    pub data: SessionData,
    pub status: PaymentSessionStatus,
}
