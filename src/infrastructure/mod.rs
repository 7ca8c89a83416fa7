//! Concrete adapters: the provider registry and the built-in system provider.

pub mod registry;
pub mod system;
