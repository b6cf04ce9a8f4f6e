use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::query::QuoteQueryService;
use crate::store::QuoteStore;

/// Shared application state
///
/// Cheap to clone: every field is reference counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteQueryService>,
    pub settings: Arc<Settings>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<QuoteStore>, settings: Settings) -> Self {
        Self {
            quotes: Arc::new(QuoteQueryService::new(store)),
            settings: Arc::new(settings),
            started_at: Instant::now(),
        }
    }

    /// Public URL of a path under the v1 prefix
    pub fn api_path(&self, path: &str) -> String {
        format!("{}{}", self.settings.api_v1_prefix, path)
    }

    /// Health check location, if health routes are mounted
    pub fn health_url(&self) -> Option<String> {
        self.settings
            .enable_health_check
            .then(|| self.api_path("/health"))
    }

    /// Swagger UI location, if docs are enabled
    pub fn docs_url(&self) -> Option<String> {
        self.settings.enable_docs.then(|| "/docs".to_string())
    }
}
