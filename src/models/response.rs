//! Backend replies and the outcome shown to the user.

use serde_json::Value;

/// Shown whenever the call itself fails, whatever the cause.
pub const FALLBACK_ERROR: &str = "Something went wrong. Try again.";

/// Shown when the backend reports success.
pub const SUCCESS_MESSAGE: &str = "Bot finished successfully!";

/// Decoded body of a `/run-bot` reply.
///
/// Any JSON value is a reply. Only objects carry fields; of those, only
/// `success`, `error` and `message` are read.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendReply {
    Object {
        success: Value,
        error: Value,
        message: Value,
    },
    /// A truthy non-object (`[]`, `"ok"`, `3`). Reads as a failure with no text.
    Bare,
    /// `null`, `false`, `0` or `""`. Nothing is shown for it.
    Falsy,
}

impl BackendReply {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self::from_value)
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);
                BackendReply::Object {
                    success: take("success"),
                    error: take("error"),
                    message: take("message"),
                }
            }
            other if is_truthy(&other) => BackendReply::Bare,
            _ => BackendReply::Falsy,
        }
    }

    /// `success` is checked for truthiness, not strict `true`.
    pub fn is_success(&self) -> bool {
        matches!(self, BackendReply::Object { success, .. } if is_truthy(success))
    }

    /// The backend's error text as it would be printed.
    pub fn error_text(&self) -> String {
        match self {
            BackendReply::Object { error, .. } => display_value(error),
            _ => String::new(),
        }
    }

    pub fn message_text(&self) -> Option<String> {
        match self {
            BackendReply::Object { message, .. } if !message.is_null() => {
                Some(display_value(message))
            }
            _ => None,
        }
    }

    /// What the form shows for this reply; `None` for a falsy body.
    pub fn into_result(self) -> Option<ResponseResult> {
        if matches!(self, BackendReply::Falsy) {
            return None;
        }
        Some(if self.is_success() {
            ResponseResult::Success {
                message: self.message_text(),
            }
        } else {
            ResponseResult::Failure {
                error: self.error_text(),
            }
        })
    }
}

/// Outcome of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseResult {
    /// Backend reported success
    Success { message: Option<String> },
    /// Backend reported failure with its own error text
    Failure { error: String },
    /// The call failed before a usable reply arrived
    Fallback,
}

impl ResponseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }

    /// Error text to show, if this is a failure.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            ResponseResult::Success { .. } => None,
            ResponseResult::Failure { error } => Some(error),
            ResponseResult::Fallback => Some(FALLBACK_ERROR),
        }
    }

    /// One-line rendering, e.g. `✅ Bot finished successfully!` or `❌ bad login`.
    pub fn display_text(&self) -> String {
        match self.error_text() {
            None => format!("✅ {}", SUCCESS_MESSAGE),
            Some(error) => format!("❌ {}", error),
        }
    }
}

/// JavaScript-style truthiness.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(body: &str) -> BackendReply {
        BackendReply::from_slice(body.as_bytes()).unwrap()
    }

    #[test]
    fn test_success_reply() {
        let result = decode(r#"{"success": true, "message": "Job automation completed."}"#)
            .into_result()
            .unwrap();
        assert_eq!(
            result,
            ResponseResult::Success {
                message: Some("Job automation completed.".to_string())
            }
        );
        assert_eq!(result.display_text(), "✅ Bot finished successfully!");
        assert_eq!(result.error_text(), None);
    }

    #[test]
    fn test_failure_reply_keeps_error_verbatim() {
        let result = decode(r#"{"success": false, "error": "bad login"}"#)
            .into_result()
            .unwrap();
        assert_eq!(result.error_text(), Some("bad login"));
        assert_eq!(result.display_text(), "❌ bad login");
    }

    #[test]
    fn test_failure_without_error_renders_empty_text() {
        let result = decode(r#"{"ok": true}"#).into_result();
        assert_eq!(
            result,
            Some(ResponseResult::Failure {
                error: String::new()
            })
        );
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(
            ResponseResult::Fallback.display_text(),
            "❌ Something went wrong. Try again."
        );
    }

    #[test]
    fn test_truthiness() {
        for truthy in [json!(true), json!(1), json!(-0.5), json!("yes"), json!("false"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
        }
        for falsy in [json!(false), json!(0), json!(0.0), json!(""), Value::Null] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
        }
    }

    #[test]
    fn test_truthy_string_success() {
        assert!(decode(r#"{"success": "true"}"#).is_success());
        assert!(!decode(r#"{"success": 0, "error": "x"}"#).is_success());
    }

    #[test]
    fn test_non_string_error_is_printed() {
        let reply = decode(r#"{"success": false, "error": 42}"#);
        assert_eq!(reply.error_text(), "42");
    }

    #[test]
    fn test_truthy_non_object_is_failure_without_text() {
        for body in ["[]", "[true]", r#""ok""#, "3"] {
            assert_eq!(
                decode(body).into_result(),
                Some(ResponseResult::Failure {
                    error: String::new()
                }),
                "{body}"
            );
        }
        assert_eq!(ResponseResult::Failure { error: String::new() }.display_text(), "❌ ");
    }

    #[test]
    fn test_falsy_body_shows_nothing() {
        for body in ["null", "false", "0", r#""""#] {
            assert_eq!(decode(body), BackendReply::Falsy, "{body}");
            assert_eq!(decode(body).into_result(), None, "{body}");
        }
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        assert!(BackendReply::from_slice(b"<html>oops</html>").is_err());
        assert!(BackendReply::from_slice(b"").is_err());
    }
}
