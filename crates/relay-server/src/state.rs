use std::sync::Arc;
use std::time::Duration;

use relay_config::Config;
use relay_llm::{LLMError, LLMProvider, OpenAiCompatProvider, ProviderConfig};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LLMProvider>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(llm: Arc<dyn LLMProvider>, max_body_bytes: usize) -> Self {
        Self { llm, max_body_bytes }
    }

    /// Build the upstream provider from a validated config
    pub fn from_config(config: &Config) -> Result<Self, LLMError> {
        let api_key = config
            .upstream
            .api_key
            .clone()
            .ok_or_else(|| LLMError::Config("upstream api_key is not set".to_string()))?;

        let provider_config = ProviderConfig::new("upstream", config.upstream.url.clone(), api_key)
            .with_model(config.upstream.model.clone())
            .with_timeout(Duration::from_secs(config.upstream.timeout_seconds));

        let llm = OpenAiCompatProvider::new(provider_config)?;
        Ok(Self::new(Arc::new(llm), config.server.max_body_bytes))
    }
}
