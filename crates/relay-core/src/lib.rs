//! Wire types and request reshaping for the chat relay.
//!
//! Nothing in this crate performs I/O. The server feeds it the parsed inbound
//! request and gets back the request body to send upstream.

pub mod chat;
pub mod content;
pub mod upstream;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, Choice, ROLE_ASSISTANT, ROLE_USER};
pub use content::{classify, select_messages, MessageKind, Selection};
pub use upstream::{build_upstream_request, ContentPart, ImageUrl, UpstreamContent, UpstreamMessage, UpstreamRequest};
