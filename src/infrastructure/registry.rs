use crate::domain::ports::PaymentProviderRef;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no payment provider registered under `{provider_id}` ({registered} registered)")]
    NotFound {
        provider_id: String,
        registered: usize,
    },
}

/// Immutable mapping from provider identifier to provider instance.
///
/// Built once at startup. Cloning is cheap and every clone resolves to the
/// same provider instances.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Arc<HashMap<String, PaymentProviderRef>>,
}

impl ProviderRegistry {
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    pub fn resolve(
        &self,
        provider_id: &str,
    ) -> std::result::Result<PaymentProviderRef, RegistryError> {
        self.providers
            .get(provider_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                provider_id: provider_id.to_string(),
                registered: self.providers.len(),
            })
    }

    pub fn contains(&self, provider_id: &str) -> bool {
        self.providers.contains_key(provider_id)
    }

    /// Registered identifiers, sorted.
    pub fn provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[derive(Default)]
pub struct ProviderRegistryBuilder {
    providers: HashMap<String, PaymentProviderRef>,
}

impl ProviderRegistryBuilder {
    /// Adds a provider. Identifiers must be unique.
    pub fn register(
        mut self,
        provider_id: impl Into<String>,
        provider: PaymentProviderRef,
    ) -> Result<Self> {
        let provider_id = provider_id.into();
        if self.providers.contains_key(&provider_id) {
            return Err(PaymentError::DuplicateProvider(provider_id));
        }
        self.providers.insert(provider_id, provider);
        Ok(self)
    }

    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            providers: Arc::new(self.providers),
        }
    }
}
