//! Prelude module for convenient imports.
//!
//! ```ignore
//! use jobbot::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, BackendStatus, Focus};

// Backend and HTTP seam
pub use crate::backend::{BotBackend, DEFAULT_BACKEND_URL};
pub use crate::traits::{HttpClient, HttpError, Response};

// Errors
pub use crate::error::{BotError, BotResult, NetworkError};

// Model types
pub use crate::models::{BackendReply, FormField, FormState, ResponseResult, RunBotRequest};

// State types
pub use crate::state::{reduce, FormEvent, FormSnapshot, Phase, Rejection};

// UI
pub use crate::ui::render;
