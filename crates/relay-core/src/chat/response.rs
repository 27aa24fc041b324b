use serde::{Deserialize, Serialize};

use super::request::ChatMessage;

/// One candidate reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

/// Chat completion response.
///
/// The same shape is decoded from the upstream vendor and encoded back to the
/// caller. Extra vendor fields (`id`, `usage`, `finish_reason`) are ignored on
/// decode; `choices` and each message's `role`/`content` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// Wrap generated text as a single assistant choice
    pub fn from_reply(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ChatMessage::assistant(content),
            }],
        }
    }

    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}
