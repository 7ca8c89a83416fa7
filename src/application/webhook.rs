use super::dispatcher::resolve_provider;
use crate::domain::webhook::{WebhookActionResult, WebhookPayload};
use crate::error::{PaymentError, Result};
use crate::infrastructure::registry::ProviderRegistry;
use crate::logging::Logger;
use std::sync::Arc;

/// Hands inbound webhook payloads to the provider that owns them.
///
/// Payload contents are never inspected here; signatures, encodings and
/// schemas are the provider's business.
#[derive(Clone)]
pub struct WebhookRouter {
    registry: ProviderRegistry,
    logger: Arc<dyn Logger>,
}

impl WebhookRouter {
    pub fn new(registry: ProviderRegistry, logger: Arc<dyn Logger>) -> Self {
        Self { registry, logger }
    }

    /// Returns the provider's action result as-is. No error classification.
    pub async fn route(
        &self,
        provider_id: &str,
        payload: WebhookPayload,
    ) -> Result<WebhookActionResult> {
        let provider = resolve_provider(&self.registry, self.logger.as_ref(), provider_id)?;
        let message = format!("routing webhook to payment provider {provider_id}");
        self.logger.debug(&message);
        provider
            .get_webhook_action_and_data(payload)
            .await
            .map_err(PaymentError::ProviderFault)
    }
}
