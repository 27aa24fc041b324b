//! `/chat` handlers.
//!
//! POST reshapes the caller's messages, forwards them upstream once and
//! relays the first choice back. OPTIONS answers the CORS pre-flight. Every
//! other method gets 405.

use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use relay_core::{build_upstream_request, select_messages, ChatRequest, ChatResponse};
use tracing::{debug, info};

use crate::error::RelayError;
use crate::state::AppState;

const PREVIEW_CHARS: usize = 64;

/// POST /chat
pub async fn chat(
    state: web::Data<AppState>,
    payload: web::Payload,
) -> Result<HttpResponse, RelayError> {
    match relay(&state, payload).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            e.log();
            Err(e)
        }
    }
}

/// OPTIONS /chat
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Any other method on /chat
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, RelayError> {
    let e = RelayError::MethodNotAllowed(req.method().to_string());
    e.log();
    Err(e)
}

async fn relay(state: &AppState, payload: web::Payload) -> Result<ChatResponse, RelayError> {
    let body = read_body(payload, state.max_body_bytes).await?;

    let request: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| RelayError::InvalidJson(e.to_string()))?;
    if request.messages.is_empty() {
        return Err(RelayError::EmptyMessages);
    }

    info!(
        provider = state.llm.provider_id(),
        count = request.messages.len(),
        "Received message: {}",
        preview(&request.messages[0].content)
    );

    let selection = select_messages(&request.messages);
    if selection.is_empty() {
        debug!("Every message is empty, sending no messages upstream");
    }
    let upstream_request = build_upstream_request(state.llm.model(), &selection);

    let response = state.llm.chat(&upstream_request).await?;
    let content = response
        .first_content()
        .ok_or(RelayError::UpstreamNoChoices)?;

    info!(
        provider = state.llm.provider_id(),
        chars = content.chars().count(),
        "Generated response: {}",
        preview(content)
    );

    Ok(ChatResponse::from_reply(content))
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, RelayError> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| RelayError::MalformedBody(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(RelayError::MalformedBody(format!(
                "request body exceeds {} bytes",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// First few characters of a message, so data URLs don't flood the log
fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short() {
        assert_eq!(preview("hello"), "hello");
        assert_eq!(preview(""), "");
    }

    #[test]
    fn test_preview_truncates() {
        let long = format!("data:image/png;base64,{}", "A".repeat(500));
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_preview_multibyte() {
        let text = "竹".repeat(PREVIEW_CHARS + 1);
        assert_eq!(preview(&text).chars().count(), PREVIEW_CHARS + 3);
    }
}
