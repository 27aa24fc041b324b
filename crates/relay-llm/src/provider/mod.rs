pub mod config;

pub use config::ProviderConfig;

use async_trait::async_trait;
use relay_core::{ChatResponse, UpstreamRequest};

use crate::error::Result;

/// An upstream chat-completion backend.
///
/// One call, one request: implementations must not retry.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider identifier, used in logs
    fn provider_id(&self) -> &str;

    /// Model every request is sent with
    fn model(&self) -> &str;

    /// Send a non-streaming chat completion request
    async fn chat(&self, request: &UpstreamRequest) -> Result<ChatResponse>;
}
