pub mod chat;

pub use chat::{chat, method_not_allowed, preflight};
