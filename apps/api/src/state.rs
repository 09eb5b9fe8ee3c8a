use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Oracle;
use crate::poetry::generator::PoetSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend. `OllamaClient` in production, a stub in tests.
    pub oracle: Arc<dyn Oracle>,
    pub poet_settings: PoetSettings,
}

impl AppState {
    pub fn new(oracle: Arc<dyn Oracle>, config: &Config) -> Self {
        Self {
            oracle,
            poet_settings: PoetSettings::from_config(config),
        }
    }
}
