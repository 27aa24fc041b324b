pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;

pub use error::RelayError;
pub use server::{configure, cors_headers, run_server};
pub use state::AppState;
