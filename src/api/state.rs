use std::sync::Arc;

use crate::providers::Providers;

/// Shared application state for API handlers.
///
/// Cloned per request; everything inside is immutable or internally shared.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Upstream clients lookups dispatch to
    pub providers: Providers,

    /// Reported by `/health`
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(providers: Providers, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            providers,
            service_name: service_name.into(),
        }
    }
}
