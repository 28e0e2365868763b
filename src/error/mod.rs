//! Error handling for jobbot.
//!
//! - [`NetworkError`]: classified transport failures, each with an error code
//! - [`BotError`]: everything between issuing `/run-bot` and a decoded reply
//! - [`BotResult<T>`]: result alias used by the backend client
//!
//! Backend-reported failures (`success: false`) are not errors at this
//! layer; they are a normal [`crate::models::ResponseResult`].

mod bot_error;
mod network;

pub use bot_error::{BotError, BotResult};
pub use network::{classify_http_error, NetworkError};
