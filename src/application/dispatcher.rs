use super::normalizer::classify;
use super::webhook::WebhookRouter;
use crate::config::DispatcherConfig;
use crate::domain::ports::PaymentProviderRef;
use crate::domain::session::{
    AuthorizedSession, PaymentContext, PaymentSessionStatus, SessionData, SessionInput,
};
use crate::domain::webhook::{WebhookActionResult, WebhookPayload};
use crate::error::{PaymentError, Result};
use crate::infrastructure::registry::ProviderRegistry;
use crate::logging::Logger;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Looks a provider up, turning a miss into a configuration fault.
///
/// The registry's own error is logged as the cause; the caller only gets the
/// remediation message.
pub(crate) fn resolve_provider(
    registry: &ProviderRegistry,
    logger: &dyn Logger,
    provider_id: &str,
) -> Result<PaymentProviderRef> {
    registry.resolve(provider_id).map_err(|cause| {
        let err = PaymentError::ProviderNotConfigured {
            provider_id: provider_id.to_string(),
        };
        logger.error(&err.to_string(), &cause);
        err
    })
}

/// Uniform entry point for driving a payment session through its lifecycle.
///
/// `PaymentProviderService` resolves the provider for every call, invokes the
/// matching capability with the session data untouched, and normalizes any
/// provider rejection into [`PaymentError::InvalidData`]. It holds no session
/// state and takes no locks, so calls may run concurrently.
#[derive(Clone)]
pub struct PaymentProviderService {
    registry: ProviderRegistry,
    logger: Arc<dyn Logger>,
    webhooks: WebhookRouter,
}

impl PaymentProviderService {
    /// Creates a new `PaymentProviderService`.
    ///
    /// # Arguments
    ///
    /// * `registry` - Providers available to this service, keyed by identifier.
    /// * `logger` - Sink for configuration faults and dispatch traces.
    pub fn new(registry: ProviderRegistry, logger: Arc<dyn Logger>) -> Self {
        let webhooks = WebhookRouter::new(registry.clone(), logger.clone());
        Self {
            registry,
            logger,
            webhooks,
        }
    }

    pub fn from_config(registry: ProviderRegistry, config: &DispatcherConfig) -> Self {
        Self::new(registry, config.logger.build())
    }

    pub fn list_providers(&self) -> Vec<String> {
        self.registry.provider_ids()
    }

    fn resolve(&self, provider_id: &str, operation: &str) -> Result<PaymentProviderRef> {
        let provider = resolve_provider(&self.registry, self.logger.as_ref(), provider_id)?;
        let message = format!("{operation} via payment provider {provider_id}");
        self.logger.debug(&message);
        Ok(provider)
    }

    /// Starts a session with the provider and returns its data.
    pub async fn create_session(
        &self,
        provider_id: &str,
        input: SessionInput,
    ) -> Result<SessionData> {
        let provider = self.resolve(provider_id, "create_session")?;
        let output = classify(provider.initiate_payment(input).await)?;
        Ok(output.data)
    }

    /// Returns `None` when the provider had nothing to update.
    pub async fn update_session(
        &self,
        provider_id: &str,
        input: SessionInput,
    ) -> Result<Option<SessionData>> {
        let provider = self.resolve(provider_id, "update_session")?;
        let output = classify(provider.update_payment(input).await)?;
        Ok(output.map(|o| o.data))
    }

    pub async fn delete_session(&self, provider_id: &str, data: SessionData) -> Result<()> {
        let provider = self.resolve(provider_id, "delete_session")?;
        classify(provider.delete_payment(data).await)?;
        Ok(())
    }

    /// Authorizes the session. Returns both the provider data and the status
    /// the provider moved the session into.
    pub async fn authorize_payment(
        &self,
        provider_id: &str,
        data: SessionData,
        context: PaymentContext,
    ) -> Result<AuthorizedSession> {
        let provider = self.resolve(provider_id, "authorize_payment")?;
        classify(provider.authorize_payment(data, context).await)
    }

    /// Reads the status straight from the provider.
    ///
    /// Providers report status directly, so there is no rejection to
    /// normalize; only implementation faults can fail this call.
    pub async fn get_status(
        &self,
        provider_id: &str,
        data: SessionData,
    ) -> Result<PaymentSessionStatus> {
        let provider = self.resolve(provider_id, "get_status")?;
        provider
            .get_payment_status(data)
            .await
            .map_err(PaymentError::ProviderFault)
    }

    pub async fn capture_payment(
        &self,
        provider_id: &str,
        data: SessionData,
    ) -> Result<SessionData> {
        let provider = self.resolve(provider_id, "capture_payment")?;
        let output = classify(provider.capture_payment(data).await)?;
        Ok(output.data)
    }

    pub async fn cancel_payment(&self, provider_id: &str, data: SessionData) -> Result<()> {
        let provider = self.resolve(provider_id, "cancel_payment")?;
        classify(provider.cancel_payment(data).await)?;
        Ok(())
    }

    /// Refunds `amount`. The amount is forwarded as given, zero included.
    pub async fn refund_payment(
        &self,
        provider_id: &str,
        data: SessionData,
        amount: Decimal,
    ) -> Result<SessionData> {
        let provider = self.resolve(provider_id, "refund_payment")?;
        let output = classify(provider.refund_payment(data, amount).await)?;
        Ok(output.data)
    }

    pub async fn retrieve_payment(
        &self,
        provider_id: &str,
        data: SessionData,
    ) -> Result<SessionData> {
        let provider = self.resolve(provider_id, "retrieve_payment")?;
        let output = classify(provider.retrieve_payment(data).await)?;
        Ok(output.data)
    }

    pub async fn get_webhook_action_and_data(
        &self,
        provider_id: &str,
        payload: WebhookPayload,
    ) -> Result<WebhookActionResult> {
        self.webhooks.route(provider_id, payload).await
    }
}
