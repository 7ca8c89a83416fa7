use paydispatch::application::webhook::WebhookRouter;
use paydispatch::domain::webhook::{
    PaymentAction, WebhookActionData, WebhookActionResult, WebhookPayload,
};
use paydispatch::error::ErrorKind;
use paydispatch::infrastructure::registry::ProviderRegistry;
use paydispatch::logging::NoopLogger;
use rust_decimal_macros::dec;
use std::sync::Arc;

mod common;
use common::{STUB_ID, Script, StubProvider, service_with};

fn captured() -> WebhookActionResult {
    WebhookActionResult {
        action: PaymentAction::Captured,
        data: Some(WebhookActionData {
            session_id: "payses_1".to_string(),
            amount: dec!(49.99),
        }),
    }
}

#[tokio::test]
async fn test_webhook_result_returned_as_is() {
    let provider = Arc::new(
        StubProvider::new(Script::Succeed(Default::default())).with_webhook_result(captured()),
    );
    let (service, _) = service_with(provider.clone());
    let payload = WebhookPayload::from_raw(br#"{"type":"payment_intent.succeeded"}"#.to_vec())
        .with_header("stripe-signature", "t=1,v1=abc");

    let result = service
        .get_webhook_action_and_data(STUB_ID, payload.clone())
        .await
        .unwrap();

    assert_eq!(result, captured());
    assert_eq!(provider.webhooks.lock().unwrap().as_slice(), &[payload]);
}

#[tokio::test]
async fn test_webhook_ignores_provider_error_shape() {
    // A rejecting script does not matter: webhook results are never classified.
    let provider = StubProvider::new(Script::Reject(
        paydispatch::domain::ports::ProviderError::new("ignored"),
    ));
    let (service, _) = service_with(Arc::new(provider));

    let result = service
        .get_webhook_action_and_data(STUB_ID, WebhookPayload::default())
        .await
        .unwrap();
    assert_eq!(result.action, PaymentAction::NotSupported);
}

#[tokio::test]
async fn test_router_standalone() {
    let registry = ProviderRegistry::builder()
        .register(
            STUB_ID,
            Arc::new(StubProvider::new(Script::Fault("bad signature"))),
        )
        .unwrap()
        .build();
    let router = WebhookRouter::new(registry, Arc::new(NoopLogger));

    let err = router
        .route(STUB_ID, WebhookPayload::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ProviderFault);
    assert_eq!(err.to_string(), "bad signature");

    let missing = router
        .route("pp_nope", WebhookPayload::default())
        .await
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotConfigured);
}
