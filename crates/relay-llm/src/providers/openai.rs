//! OpenAI-compatible chat-completions backend (Groq, OpenAI, local servers).

use async_trait::async_trait;
use relay_core::{ChatResponse, UpstreamRequest};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{LLMError, Result};
use crate::provider::{LLMProvider, ProviderConfig};

/// Sends chat requests to a single OpenAI-compatible endpoint.
///
/// The reqwest client and the auth headers are built once in [`new`](Self::new)
/// and shared by every request.
pub struct OpenAiCompatProvider {
    client: Client,
    config: ProviderConfig,
    headers: HeaderMap,
}

impl OpenAiCompatProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LLMError::Config(e.to_string()))?;
        let headers = Self::build_headers(&config.api_key)?;

        Ok(Self {
            client,
            config,
            headers,
        })
    }

    /// Build request headers
    fn build_headers(api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| LLMError::Config(format!("Invalid api key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

#[async_trait]
impl LLMProvider for OpenAiCompatProvider {
    fn provider_id(&self) -> &str {
        &self.config.provider_id
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn chat(&self, request: &UpstreamRequest) -> Result<ChatResponse> {
        let body = serde_json::to_vec(request).map_err(|e| LLMError::Encoding(e.to_string()))?;

        debug!(
            provider = %self.config.provider_id,
            url = %self.config.url,
            bytes = body.len(),
            "Sending upstream request"
        );

        let response = self
            .client
            .post(&self.config.url)
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                LLMError::Network(e.to_string())
            } else {
                LLMError::InvalidResponse(e.to_string())
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| LLMError::InvalidResponse(e.to_string()))
    }
}
