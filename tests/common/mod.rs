#![allow(dead_code)]

use async_trait::async_trait;
use paydispatch::application::dispatcher::PaymentProviderService;
use paydispatch::domain::ports::{
    BoxError, PaymentProvider, ProviderError, ProviderFailure, ProviderResult,
};
use paydispatch::domain::session::{
    AuthorizedSession, PaymentContext, PaymentSessionStatus, ProviderOutput, SessionData,
    SessionInput,
};
use paydispatch::domain::webhook::{WebhookActionResult, WebhookPayload};
use paydispatch::infrastructure::registry::ProviderRegistry;
use paydispatch::logging::Logger;
use rust_decimal::Decimal;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub const STUB_ID: &str = "pp_stub";

/// What every fallible capability of a [`StubProvider`] answers with.
#[derive(Clone)]
pub enum Script {
    Succeed(ProviderOutput),
    Reject(ProviderError),
    Fault(&'static str),
}

/// Provider that answers from a script and records what it was given.
pub struct StubProvider {
    script: Script,
    status: PaymentSessionStatus,
    update_returns_nothing: bool,
    webhook_result: WebhookActionResult,
    pub received: Mutex<Vec<(&'static str, SessionData)>>,
    pub refunds: Mutex<Vec<Decimal>>,
    pub contexts: Mutex<Vec<PaymentContext>>,
    pub webhooks: Mutex<Vec<WebhookPayload>>,
}

impl StubProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            status: PaymentSessionStatus::Pending,
            update_returns_nothing: false,
            webhook_result: WebhookActionResult::not_supported(),
            received: Mutex::new(Vec::new()),
            refunds: Mutex::new(Vec::new()),
            contexts: Mutex::new(Vec::new()),
            webhooks: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, status: PaymentSessionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn without_update(mut self) -> Self {
        self.update_returns_nothing = true;
        self
    }

    pub fn with_webhook_result(mut self, result: WebhookActionResult) -> Self {
        self.webhook_result = result;
        self
    }

    fn answer(&self, op: &'static str, data: SessionData) -> ProviderResult<ProviderOutput> {
        self.received.lock().unwrap().push((op, data));
        match &self.script {
            Script::Succeed(output) => Ok(output.clone()),
            Script::Reject(err) => Err(ProviderFailure::Rejected(err.clone())),
            Script::Fault(msg) => Err(ProviderFailure::Fault((*msg).into())),
        }
    }
}

#[async_trait]
impl PaymentProvider for StubProvider {
    async fn initiate_payment(&self, input: SessionInput) -> ProviderResult<ProviderOutput> {
        self.contexts.lock().unwrap().push(input.context);
        self.answer("initiate", input.data)
    }

    async fn update_payment(&self, input: SessionInput) -> ProviderResult<Option<ProviderOutput>> {
        self.contexts.lock().unwrap().push(input.context);
        let output = self.answer("update", input.data)?;
        Ok((!self.update_returns_nothing).then_some(output))
    }

    async fn delete_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        self.answer("delete", data)
    }

    async fn authorize_payment(
        &self,
        data: SessionData,
        context: PaymentContext,
    ) -> ProviderResult<AuthorizedSession> {
        self.contexts.lock().unwrap().push(context);
        let output = self.answer("authorize", data)?;
        Ok(AuthorizedSession {
            data: output.data,
            status: output.status.unwrap_or(self.status),
        })
    }

    async fn get_payment_status(
        &self,
        data: SessionData,
    ) -> Result<PaymentSessionStatus, BoxError> {
        self.received.lock().unwrap().push(("status", data));
        match &self.script {
            Script::Fault(msg) => Err((*msg).into()),
            _ => Ok(self.status),
        }
    }

    async fn capture_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        self.answer("capture", data)
    }

    async fn cancel_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        self.answer("cancel", data)
    }

    async fn refund_payment(
        &self,
        data: SessionData,
        amount: Decimal,
    ) -> ProviderResult<ProviderOutput> {
        self.refunds.lock().unwrap().push(amount);
        self.answer("refund", data)
    }

    async fn retrieve_payment(&self, data: SessionData) -> ProviderResult<ProviderOutput> {
        self.answer("retrieve", data)
    }

    async fn get_webhook_action_and_data(
        &self,
        payload: WebhookPayload,
    ) -> Result<WebhookActionResult, BoxError> {
        self.webhooks.lock().unwrap().push(payload);
        match &self.script {
            Script::Fault(msg) => Err((*msg).into()),
            _ => Ok(self.webhook_result.clone()),
        }
    }
}

/// Logger that keeps every error it is handed, with its cause text.
#[derive(Default)]
pub struct RecordingLogger {
    pub errors: Mutex<Vec<(String, String)>>,
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.errors
            .lock()
            .unwrap()
            .push((message.to_string(), cause.to_string()));
    }

    fn debug(&self, _message: &str) {}
}

pub fn data(pairs: &[(&str, serde_json::Value)]) -> SessionData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn service_with(
    provider: Arc<StubProvider>,
) -> (PaymentProviderService, Arc<RecordingLogger>) {
    let registry = ProviderRegistry::builder()
        .register(STUB_ID, provider)
        .unwrap()
        .build();
    let logger = Arc::new(RecordingLogger::default());
    (PaymentProviderService::new(registry, logger.clone()), logger)
}
