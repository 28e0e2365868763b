//! AppMessage enum for async communication within the application.

use crate::health_check::HealthCheckResult;
use crate::models::BackendReply;

/// Messages sent from background tasks back into the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The backend answered attempt `attempt` with a decodable reply
    SubmitCompleted { attempt: u64, reply: BackendReply },
    /// Attempt `attempt` failed before a usable reply; `code` is for the log
    SubmitFailed { attempt: u64, code: &'static str },
    /// Result of the background reachability probe
    HealthChecked(HealthCheckResult),
}
