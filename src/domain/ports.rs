use super::session::{
    AuthorizedSession, PaymentContext, PaymentSessionStatus, ProviderOutput, SessionData,
    SessionInput,
};
use super::webhook::{WebhookActionResult, WebhookPayload};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Unclassified error raised by a provider implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A business failure reported by a provider, e.g. a declined card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct ProviderError {
    pub error: String,
    pub detail: Option<String>,
    pub code: Option<String>,
}

impl ProviderError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
            code: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Why a provider capability did not produce a success payload.
#[derive(Error, Debug)]
pub enum ProviderFailure {
    /// The provider answered with its error shape; the dispatcher normalizes it.
    #[error(transparent)]
    Rejected(ProviderError),
    /// The provider itself broke; passed through to the caller untouched.
    #[error(transparent)]
    Fault(BoxError),
}

impl From<ProviderError> for ProviderFailure {
    fn from(err: ProviderError) -> Self {
        Self::Rejected(err)
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderFailure>;

/// Capabilities every payment provider plugin implements.
///
/// Implementations must be safe to call concurrently; the dispatcher never
/// serializes calls, not even for the same session.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn initiate_payment(&self, input: SessionInput) -> ProviderResult<ProviderOutput>;

    /// `Ok(None)` means the provider had nothing to update.
    async fn update_payment(&self, input: SessionInput) -> ProviderResult<Option<ProviderOutput>>;

    async fn delete_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput>;

    async fn authorize_payment(
        &self,
        data: SessionData,
        context: PaymentContext,
    ) -> ProviderResult<AuthorizedSession>;

    async fn get_payment_status(
        &self,
        data: SessionData,
    ) -> std::result::Result<PaymentSessionStatus, BoxError>;

    async fn capture_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput>;

    async fn cancel_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput>;

    async fn refund_payment(
        &self,
        data: SessionData,
        amount: Decimal,
    ) -> ProviderResult<ProviderOutput>;

    async fn retrieve_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput>;

    async fn get_webhook_action_and_data(
        &self,
        payload: WebhookPayload,
    ) -> std::result::Result<WebhookActionResult, BoxError>;
}

pub type PaymentProviderRef = Arc<dyn PaymentProvider>;
