//! Application state and the form controller.
//!
//! [`App`] owns the current [`FormSnapshot`] and feeds every change through
//! [`reduce`]. Network calls run as background tasks that report back over
//! an unbounded channel as [`AppMessage`]s.

mod handlers;
mod messages;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::backend::BotBackend;
use crate::health_check::{run_health_check, HealthCheckResult};
use crate::input::CommandRegistry;
use crate::models::{FieldKind, FormField, FormState, RunBotRequest};
use crate::state::{reduce, Effect, FormEvent, FormSnapshot, Rejection};
use crate::widgets::InputBox;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Submit,
}

impl Focus {
    /// Focus ring order: the five fields, then the submit control.
    pub fn next(self) -> Self {
        match self {
            Focus::Field(field) => match FormField::ALL.get(field.index() + 1) {
                Some(next) => Focus::Field(*next),
                None => Focus::Submit,
            },
            Focus::Submit => Focus::Field(FormField::ALL[0]),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Field(field) if field.index() == 0 => Focus::Submit,
            Focus::Field(field) => Focus::Field(FormField::ALL[field.index() - 1]),
            Focus::Submit => Focus::Field(FormField::ALL[FormField::ALL.len() - 1]),
        }
    }
}

/// Reachability of the backend as shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Unknown,
    Checking,
    Reachable { response_time_ms: Option<u64> },
    Unreachable { reason: String },
}

impl From<HealthCheckResult> for BackendStatus {
    fn from(result: HealthCheckResult) -> Self {
        if result.reachable {
            BackendStatus::Reachable {
                response_time_ms: result.response_time_ms,
            }
        } else {
            BackendStatus::Unreachable {
                reason: result
                    .error_message
                    .unwrap_or_else(|| "not responding".to_string()),
            }
        }
    }
}

/// Main application state
pub struct App {
    /// Current form snapshot; replaced wholesale on every transition
    pub snapshot: FormSnapshot,
    /// Cursor-aware editors, one per field, kept in step with `snapshot.form`
    editors: Vec<InputBox>,
    pub focus: Focus,
    /// Client-side notice (validation) shown above the result line
    pub notice: Option<String>,
    pub backend_status: BackendStatus,
    backend: BotBackend,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    pub should_quit: bool,
    keys: CommandRegistry,
    /// Animation counter advanced by the event loop tick
    pub tick_count: u64,
}

impl App {
    pub fn new(backend: BotBackend, form: FormState) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let editors = FormField::ALL
            .iter()
            .map(|field| {
                let mut editor = if field.kind() == FieldKind::Multiline {
                    InputBox::multiline()
                } else {
                    InputBox::new()
                };
                editor.set_content(form.get(*field));
                editor
            })
            .collect();

        Self {
            snapshot: FormSnapshot::new(form),
            editors,
            focus: Focus::Field(FormField::ALL[0]),
            notice: None,
            backend_status: BackendStatus::Unknown,
            backend,
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            should_quit: false,
            keys: CommandRegistry::new(),
            tick_count: 0,
        }
    }

    pub fn backend(&self) -> &BotBackend {
        &self.backend
    }

    pub fn editor(&self, field: FormField) -> &InputBox {
        &self.editors[field.index()]
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    /// Advance animations; only spinners need periodic redraws.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() || self.backend_status == BackendStatus::Checking {
            self.mark_dirty();
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    /// Run one event through the reducer and keep the new snapshot.
    pub fn apply(&mut self, event: FormEvent) -> Result<Option<Effect>, Rejection> {
        let transition = reduce(&self.snapshot, event)?;
        if transition.snapshot.phase != self.snapshot.phase {
            tracing::debug!(
                from = ?self.snapshot.phase,
                to = ?transition.snapshot.phase,
                "Form phase changed"
            );
        }
        self.snapshot = transition.snapshot;
        self.mark_dirty();
        Ok(transition.effect)
    }

    /// Replace a field's value (editor and form state together).
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.editors[field.index()].set_content(value);
        self.sync_field(field);
    }

    /// Push the editor's text into the form state.
    fn sync_field(&mut self, field: FormField) {
        let value = self.editors[field.index()].content().to_string();
        tracing::debug!(field = field.wire_name(), len = value.chars().count(), "Field changed");
        if let Err(rejection) = self.apply(FormEvent::FieldChanged { field, value }) {
            tracing::warn!(%rejection, "Field change refused");
        }
        self.refresh_notice();
    }

    /// Keep a "please fill in" notice in step with the fields still empty.
    fn refresh_notice(&mut self) {
        if self.notice.is_none() {
            return;
        }
        let missing = self.snapshot.form.missing_fields();
        self.notice = (!missing.is_empty()).then(|| Rejection::MissingFields(missing).to_string());
    }

    /// Try to submit the form.
    ///
    /// Returns `true` if a request was dispatched. A submit while one is in
    /// flight is refused; a submit with empty fields sets [`App::notice`]
    /// and moves focus to the first empty field.
    pub fn submit(&mut self) -> bool {
        match self.apply(FormEvent::SubmitStarted) {
            Ok(Some(Effect::Dispatch { attempt, request })) => {
                self.notice = None;
                self.dispatch(attempt, request);
                true
            }
            Ok(None) => false,
            Err(Rejection::MissingFields(fields)) => {
                let rejection = Rejection::MissingFields(fields.clone());
                tracing::debug!(%rejection, "Submit refused");
                self.notice = Some(rejection.to_string());
                if let Some(first) = fields.first() {
                    self.focus = Focus::Field(*first);
                }
                self.mark_dirty();
                false
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "Submit refused");
                false
            }
        }
    }

    fn dispatch(&self, attempt: u64, request: RunBotRequest) {
        tracing::info!(attempt, "Submitting form");
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match backend.run_bot(&request).await {
                Ok(reply) => AppMessage::SubmitCompleted { attempt, reply },
                Err(err) => {
                    tracing::warn!(attempt, code = err.error_code(), error = %err, "Run-bot request failed");
                    AppMessage::SubmitFailed {
                        attempt,
                        code: err.error_code(),
                    }
                }
            };
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(message);
        });
    }

    /// Probe the backend in the background.
    pub fn start_health_check(&mut self) {
        self.backend_status = BackendStatus::Checking;
        self.mark_dirty();

        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = run_health_check(&backend).await;
            let _ = tx.send(AppMessage::HealthChecked(result));
        });
    }

    /// Wait for the next background message, if this app still owns the
    /// receiver.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }
}
