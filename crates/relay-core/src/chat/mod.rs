pub mod request;
pub mod response;

pub use request::{ChatMessage, ChatRequest, ROLE_ASSISTANT, ROLE_USER};
pub use response::{ChatResponse, Choice};
