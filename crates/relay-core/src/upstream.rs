//! Request body sent to the OpenAI-compatible vendor.

use serde::{Deserialize, Serialize};

use crate::chat::ROLE_USER;
use crate::content::Selection;

/// Upstream chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    pub model: String,
    pub messages: Vec<UpstreamMessage>,
}

/// Upstream chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub role: String,
    pub content: UpstreamContent,
}

/// Message content: plain text or a list of typed parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpstreamContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// Individual content part (for multimodal messages)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl UpstreamMessage {
    /// A user message with plain text content
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: UpstreamContent::Text(content.into()),
        }
    }

    /// A user message carrying one image, referenced by URL or data URL
    pub fn image_url(url: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: UpstreamContent::Parts(vec![ContentPart::ImageUrl {
                image_url: ImageUrl { url: url.into() },
            }]),
        }
    }
}

/// Build the upstream request from the retained messages.
///
/// The image (if any) goes first as an `image_url` part carrying the inbound
/// data URL, then the text message. Both are sent with role `user`.
pub fn build_upstream_request(model: impl Into<String>, selection: &Selection<'_>) -> UpstreamRequest {
    let mut messages = Vec::with_capacity(2);

    if let Some(image) = selection.image {
        messages.push(UpstreamMessage::image_url(image.content.as_str()));
    }
    if let Some(text) = selection.text {
        messages.push(UpstreamMessage::text(text.content.as_str()));
    }

    UpstreamRequest {
        model: model.into(),
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatMessage;
    use crate::content::select_messages;
    use serde_json::json;

    #[test]
    fn test_single_text_message() {
        let inbound = vec![ChatMessage::user("hello")];
        let request = build_upstream_request("llama", &select_messages(&inbound));

        assert_eq!(request.messages, vec![UpstreamMessage::text("hello")]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"model":"llama","messages":[{"role":"user","content":"hello"}]})
        );
    }

    #[test]
    fn test_text_role_is_rewritten_to_user() {
        let inbound = vec![ChatMessage::new("system", "you are terse")];
        let request = build_upstream_request("llama", &select_messages(&inbound));
        assert_eq!(request.messages[0].role, "user");
    }

    #[test]
    fn test_image_then_text() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        let inbound = vec![ChatMessage::user("what is this?"), ChatMessage::user(data_url)];
        let request = build_upstream_request("vision", &select_messages(&inbound));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "vision",
                "messages": [
                    {"role": "user", "content": [{"type": "image_url", "image_url": {"url": data_url}}]},
                    {"role": "user", "content": "what is this?"}
                ]
            })
        );
    }

    #[test]
    fn test_last_text_survives() {
        let inbound = vec![
            ChatMessage::user("one"),
            ChatMessage::assistant("two"),
            ChatMessage::user("three"),
        ];
        let request = build_upstream_request("m", &select_messages(&inbound));
        assert_eq!(request.messages, vec![UpstreamMessage::text("three")]);
    }

    #[test]
    fn test_nothing_retained() {
        let inbound = vec![ChatMessage::user("")];
        let request = build_upstream_request("m", &select_messages(&inbound));
        assert!(request.messages.is_empty());
    }

    #[test]
    fn test_parts_round_trip_shape() {
        let message: UpstreamMessage = serde_json::from_value(json!({
            "role": "user",
            "content": [{"type": "image_url", "image_url": {"url": "https://example.com/a.png"}}]
        }))
        .unwrap();
        assert_eq!(message, UpstreamMessage::image_url("https://example.com/a.png"));
    }
}
