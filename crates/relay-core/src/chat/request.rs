use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// A single chat message.
///
/// `role` is carried as a plain string and never validated; callers send
/// "user", "assistant" or "system" but anything else passes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content)
    }
}

/// Inbound chat request.
///
/// `model` is accepted for compatibility with OpenAI-style clients but is not
/// forwarded; the upstream model comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inbound_request() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"model":"x","messages":[{"role":"user","content":"hello"}]}"#,
        )
        .unwrap();

        assert_eq!(req.model, "x");
        assert_eq!(req.messages, vec![ChatMessage::user("hello")]);
    }

    #[test]
    fn test_model_is_optional() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"messages":[{"role":"system","content":"be nice"}]}"#).unwrap();

        assert!(req.model.is_empty());
        assert_eq!(req.messages[0], ChatMessage::new("system", "be nice"));
    }

    #[test]
    fn test_messages_are_required() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"model":"x"}"#).is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"messages":[{"role":"user"}]}"#).is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"messages":[{"role":"user","content":7}]}"#).is_err());
    }

    #[test]
    fn test_unknown_role_passes_through() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"messages":[{"role":"tool","content":"42"}]}"#).unwrap();
        assert_eq!(req.messages[0].role, "tool");
    }
}
