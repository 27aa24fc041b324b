//! Relay error taxonomy and its HTTP mapping.
//!
//! `Display` is the plain-text body sent to the caller; the inner detail
//! strings are only written to the log.

use actix_web::http::header::{HeaderValue, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use relay_llm::LLMError;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Unable to read request body")]
    MalformedBody(String),

    #[error("Unable to parse JSON")]
    InvalidJson(String),

    #[error("'messages' field is empty")]
    EmptyMessages,

    #[error("Error marshaling request payload")]
    Encoding(String),

    #[error("Error sending request to upstream API")]
    UpstreamUnreachable(String),

    #[error("API request failed with status code: {status}\n{body}")]
    Upstream { status: u16, body: String },

    #[error("Error parsing response JSON")]
    UpstreamMalformedResponse(String),

    #[error("'choices' not found in the response.")]
    UpstreamNoChoices,

    #[error("Invalid method")]
    MethodNotAllowed(String),
}

impl RelayError {
    /// Write the failure to the log with its detail. Called exactly once per
    /// failed request, before the response goes out.
    pub fn log(&self) {
        match self {
            RelayError::MalformedBody(detail) => warn!("Error reading request body: {}", detail),
            RelayError::InvalidJson(detail) => warn!("Error unmarshaling JSON: {}", detail),
            RelayError::EmptyMessages => warn!("'messages' field is empty"),
            RelayError::MethodNotAllowed(method) => warn!("Invalid method received: {}", method),
            RelayError::Encoding(detail) => error!("Error marshaling request payload: {}", detail),
            RelayError::UpstreamUnreachable(detail) => {
                error!("Error sending request to upstream API: {}", detail)
            }
            RelayError::Upstream { status, body } => {
                error!(status, "Error response from upstream API: {}", body)
            }
            RelayError::UpstreamMalformedResponse(detail) => {
                error!("Error parsing response JSON: {}", detail)
            }
            RelayError::UpstreamNoChoices => error!("'choices' not found in the response."),
        }
    }
}

impl From<LLMError> for RelayError {
    fn from(e: LLMError) -> Self {
        match e {
            LLMError::Encoding(detail) => RelayError::Encoding(detail),
            LLMError::Network(detail) | LLMError::Config(detail) => {
                RelayError::UpstreamUnreachable(detail)
            }
            LLMError::Api { status, body } => RelayError::Upstream { status, body },
            LLMError::InvalidResponse(detail) => RelayError::UpstreamMalformedResponse(detail),
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MalformedBody(_) | RelayError::InvalidJson(_) | RelayError::EmptyMessages => {
                StatusCode::BAD_REQUEST
            }
            RelayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::Encoding(_)
            | RelayError::UpstreamUnreachable(_)
            | RelayError::Upstream { .. }
            | RelayError::UpstreamMalformedResponse(_)
            | RelayError::UpstreamNoChoices => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ))
            .body(self.to_string())
    }
}
