//! Application layer: the session dispatcher and its collaborators.
//!
//! `PaymentProviderService` is the single entry point callers use to drive a
//! payment session. It resolves providers through the registry, classifies
//! their results through the normalizer, and delegates inbound webhooks to
//! the `WebhookRouter`.

pub mod dispatcher;
pub mod normalizer;
pub mod webhook;
