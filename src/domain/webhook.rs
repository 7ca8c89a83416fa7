use super::session::SessionData;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw notification delivered by a provider's webhook channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookPayload {
    /// Parsed body, when the transport could parse it.
    pub data: SessionData,
    /// Exact bytes as received; providers verify signatures against these.
    pub raw_data: Vec<u8>,
    pub headers: HashMap<String, String>,
}

impl WebhookPayload {
    pub fn from_raw(raw_data: impl Into<Vec<u8>>) -> Self {
        Self {
            raw_data: raw_data.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// The lifecycle transition a caller should apply in response to a webhook.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAction {
    Authorized,
    Captured,
    Pending,
    RequiresMore,
    Canceled,
    Failed,
    NotSupported,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct WebhookActionData {
    pub session_id: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct WebhookActionResult {
    pub action: PaymentAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WebhookActionData>,
}

impl WebhookActionResult {
    pub fn not_supported() -> Self {
        Self {
            action: PaymentAction::NotSupported,
            data: None,
        }
    }
}
