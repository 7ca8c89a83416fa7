use crate::domain::ports::{BoxError, PaymentProvider, ProviderResult};
use crate::domain::session::{
    AuthorizedSession, PaymentContext, PaymentSessionStatus, ProviderOutput, SessionData,
    SessionInput,
};
use crate::domain::webhook::{WebhookActionResult, WebhookPayload};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

pub const SYSTEM_PROVIDER_ID: &str = "pp_system_default";

/// Manual payment provider. Moves no money: sessions are authorized on
/// request and every other capability echoes the session data back.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProvider;

impl SystemProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProvider for SystemProvider {
    async fn initiate_payment(&self, input: SessionInput) -> ProviderResult<ProviderOutput> {
        let mut data = input.data;
        data.entry("id")
            .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
        let output = ProviderOutput::new(data);
        Ok(output.with_status(PaymentSessionStatus::Pending))
    }

    async fn update_payment(&self, input: SessionInput) -> ProviderResult<Option<ProviderOutput>> {
        Ok(Some(ProviderOutput::new(input.data)))
    }

    async fn delete_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        Ok(ProviderOutput::new(data))
    }

    async fn authorize_payment(
        &self,
        data: SessionData,
        _context: PaymentContext,
    ) -> ProviderResult<AuthorizedSession> {
        Ok(AuthorizedSession {
            data,
            status: PaymentSessionStatus::Authorized,
        })
    }

    async fn get_payment_status(
        &self,
        _data: SessionData,
    ) -> Result<PaymentSessionStatus, BoxError> {
        Ok(PaymentSessionStatus::Authorized)
    }

    async fn capture_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        Ok(ProviderOutput::new(data))
    }

    async fn cancel_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        Ok(ProviderOutput::new(data))
    }

    async fn refund_payment(
        &self,
        data: SessionData,
        _amount: Decimal,
    ) -> ProviderResult<ProviderOutput> {
        Ok(ProviderOutput::new(data))
    }

    async fn retrieve_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        Ok(ProviderOutput::new(data))
    }

    async fn get_webhook_action_and_data(
        &self,
        _payload: WebhookPayload,
    ) -> Result<WebhookActionResult, BoxError> {
        Ok(WebhookActionResult::not_supported())
    }
}
