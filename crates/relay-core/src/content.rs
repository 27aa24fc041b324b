//! Content classification for inbound messages.
//!
//! Each message is either an inline base64 image (a `data:image/...;base64`
//! URL), plain text, or empty. Only the last image and the last text message
//! are kept; earlier ones are dropped with a debug log.

use tracing::debug;

use crate::chat::ChatMessage;

const IMAGE_DATA_PREFIX: &str = "data:image/";
const BASE64_MARKER: &str = ";base64";
/// Length of `data:image/png;base64,`, the shortest header that carries a payload
const MIN_IMAGE_LEN: usize = 22;

/// Kind of content a message carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Image,
    Text,
    Empty,
}

/// Classify a message body.
///
/// An image is a data URL of at least 22 characters whose header (everything
/// before the first `,`, or the whole string when there is none) starts with
/// `data:image/` and contains `;base64`. When a `,` is present the payload
/// after it must be non-empty. Both `data:image/;base64...` and
/// `data:image/png;base64,...` qualify; a bare `data:image/;base64` does not.
pub fn classify(content: &str) -> MessageKind {
    if content.is_empty() {
        return MessageKind::Empty;
    }

    let (header, payload) = match content.split_once(',') {
        Some((header, payload)) => (header, Some(payload)),
        None => (content, None),
    };
    let is_image = content.len() >= MIN_IMAGE_LEN
        && header.starts_with(IMAGE_DATA_PREFIX)
        && header.contains(BASE64_MARKER)
        && payload.map_or(true, |p| !p.trim().is_empty());

    if is_image {
        MessageKind::Image
    } else {
        MessageKind::Text
    }
}

/// Messages retained after classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    pub image: Option<&'a ChatMessage>,
    pub text: Option<&'a ChatMessage>,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.text.is_none()
    }
}

/// Walk the messages in order, keeping the last image and the last text message.
pub fn select_messages(messages: &[ChatMessage]) -> Selection<'_> {
    let mut selection = Selection::default();

    for (index, message) in messages.iter().enumerate() {
        let kind = classify(&message.content);
        let slot = match kind {
            MessageKind::Image => &mut selection.image,
            MessageKind::Text => &mut selection.text,
            MessageKind::Empty => continue,
        };
        if slot.is_some() {
            debug!(index, role = %message.role, ?kind, "Dropping earlier message of the same kind");
        }
        *slot = Some(message);
    }

    selection
}
