//! Form snapshot and the pure reducer that advances it.
//!
//! The controller never mutates form state in place. Each user action or
//! network completion becomes a [`FormEvent`]; [`reduce`] turns the current
//! [`FormSnapshot`] plus that event into the next snapshot, or a
//! [`Rejection`] that leaves the current one untouched.

use thiserror::Error;

use crate::models::{BackendReply, FormField, FormState, ResponseResult, RunBotRequest};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight, no fresh result
    Idle,
    /// A request for `attempt` is in flight
    Submitting { attempt: u64 },
    /// The last attempt settled; its result, if any, is showing
    Settled,
}

/// Immutable view of everything the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub form: FormState,
    pub phase: Phase,
    pub result: Option<ResponseResult>,
    next_attempt: u64,
}

impl FormSnapshot {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            phase: Phase::Idle,
            result: None,
            next_attempt: 1,
        }
    }

    /// The loading flag.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn in_flight_attempt(&self) -> Option<u64> {
        match self.phase {
            Phase::Submitting { attempt } => Some(attempt),
            _ => None,
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::new(FormState::new())
    }
}

/// Discrete inputs to the reducer.
#[derive(Debug, Clone)]
pub enum FormEvent {
    FieldChanged { field: FormField, value: String },
    SubmitStarted,
    /// The backend answered with a decodable reply (success or not)
    SubmitSucceeded { attempt: u64, reply: BackendReply },
    /// The call failed before a usable reply arrived
    SubmitFailed { attempt: u64 },
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `request` to the backend, then report back with `attempt`
    Dispatch { attempt: u64, request: RunBotRequest },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub snapshot: FormSnapshot,
    pub effect: Option<Effect>,
}

impl Transition {
    fn state(snapshot: FormSnapshot) -> Self {
        Self {
            snapshot,
            effect: None,
        }
    }
}

/// Events the reducer refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("a submission is already in flight (attempt {attempt})")]
    AlreadySubmitting { attempt: u64 },

    #[error("please fill in: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),

    #[error("ignoring result of attempt {received}: not the attempt in flight")]
    StaleAttempt { received: u64 },
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.placeholder())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Advance `snapshot` by one event.
///
/// Invariants:
/// - at most one attempt is in flight; `SubmitStarted` while loading is
///   rejected
/// - `SubmitStarted` clears the previous result; editing a field does not
/// - a settle event only applies to the attempt currently in flight
pub fn reduce(snapshot: &FormSnapshot, event: FormEvent) -> Result<Transition, Rejection> {
    match event {
        FormEvent::FieldChanged { field, value } => {
            let mut next = snapshot.clone();
            next.form.set(field, value);
            if next.phase == Phase::Settled {
                next.phase = Phase::Idle;
            }
            Ok(Transition::state(next))
        }

        FormEvent::SubmitStarted => {
            if let Some(attempt) = snapshot.in_flight_attempt() {
                return Err(Rejection::AlreadySubmitting { attempt });
            }

            let missing = snapshot.form.missing_fields();
            if !missing.is_empty() {
                return Err(Rejection::MissingFields(missing));
            }

            let attempt = snapshot.next_attempt;
            let mut next = snapshot.clone();
            next.next_attempt += 1;
            next.phase = Phase::Submitting { attempt };
            next.result = None;

            Ok(Transition {
                effect: Some(Effect::Dispatch {
                    attempt,
                    request: RunBotRequest::from_form(&snapshot.form),
                }),
                snapshot: next,
            })
        }

        FormEvent::SubmitSucceeded { attempt, reply } => {
            settle(snapshot, attempt, reply.into_result())
        }

        FormEvent::SubmitFailed { attempt } => {
            settle(snapshot, attempt, Some(ResponseResult::Fallback))
        }
    }
}

fn settle(
    snapshot: &FormSnapshot,
    attempt: u64,
    result: Option<ResponseResult>,
) -> Result<Transition, Rejection> {
    if snapshot.in_flight_attempt() != Some(attempt) {
        return Err(Rejection::StaleAttempt { received: attempt });
    }

    let mut next = snapshot.clone();
    next.phase = Phase::Settled;
    next.result = result;
    Ok(Transition::state(next))
}
