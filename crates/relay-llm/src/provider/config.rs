use std::fmt;
use std::time::Duration;

/// Provider configuration
#[derive(Clone)]
pub struct ProviderConfig {
    /// Provider ID
    pub provider_id: String,
    /// Full chat-completions endpoint URL
    pub url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model to use
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create a new provider config
    pub fn new(
        provider_id: impl Into<String>,
        url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            url: url.into(),
            api_key: api_key.into(),
            model: "llama-3.2-11b-vision-preview".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider_id", &self.provider_id)
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ProviderConfig::new("groq", "https://api.groq.com/openai/v1/chat/completions", "k")
            .with_model("llama-3.1-8b-instant")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = ProviderConfig::new("groq", "http://localhost", "gsk_secret");
        assert!(!format!("{:?}", config).contains("gsk_secret"));
    }
}
