pub mod form;
mod request;
pub mod response;

pub use form::{split_keywords, FieldKind, FormField, FormState, DEFAULT_KEYWORDS};
pub use request::RunBotRequest;
pub use response::{is_truthy, BackendReply, ResponseResult, FALLBACK_ERROR, SUCCESS_MESSAGE};
