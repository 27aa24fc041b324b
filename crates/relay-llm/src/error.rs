use thiserror::Error;

/// Errors from a single upstream chat call
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("api error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LLMError>;
