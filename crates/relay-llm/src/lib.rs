pub mod error;
pub mod provider;
pub mod providers;

pub use error::{LLMError, Result};
pub use provider::{LLMProvider, ProviderConfig};
pub use providers::OpenAiCompatProvider;
