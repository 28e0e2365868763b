//! `jobbot submit`: one submission without the TUI.

use std::io::{self, IsTerminal, Write};

use super::args::SubmitArgs;
use super::output::{icons, Console};
use crate::backend::BotBackend;
use crate::models::{FormField, FormState, ResponseResult};
use crate::state::{reduce, Effect, FormEvent, FormSnapshot, Rejection};

/// How a one-shot submission ended; maps to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
    Invalid,
}

impl SubmitOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            SubmitOutcome::Succeeded => 0,
            SubmitOutcome::Failed => 1,
            SubmitOutcome::Invalid => 2,
        }
    }
}

/// Build the form from flags, asking `prompt` for any missing password.
pub fn collect_form<P>(args: &SubmitArgs, default_keywords: &str, mut prompt: P) -> io::Result<FormState>
where
    P: FnMut(FormField) -> io::Result<String>,
{
    let mut form = FormState::with_keywords(args.keywords.as_deref().unwrap_or(default_keywords));

    let given = [
        (FormField::LinkedinEmail, &args.linkedin_email),
        (FormField::LinkedinPassword, &args.linkedin_password),
        (FormField::UserEmail, &args.user_email),
        (FormField::EmailPassword, &args.email_password),
    ];

    for (field, value) in given {
        match value {
            Some(value) => form.set(field, value.as_str()),
            None if field.is_masked() => {
                tracing::debug!(field = field.wire_name(), "Prompting for password");
                form.set(field, prompt(field)?);
            }
            None => {}
        }
    }

    Ok(form)
}

/// Prompt on the terminal without echo. Off a terminal, the field stays
/// empty and validation reports it.
pub fn prompt_password(field: FormField) -> io::Result<String> {
    if !io::stdin().is_terminal() {
        return Ok(String::new());
    }
    rpassword::prompt_password(format!("{}: ", field.placeholder()))
}

/// Run one submission through the form reducer.
///
/// Returns the settled result (`None` for an empty reply), or the rejection
/// if the form is incomplete.
pub async fn submit_once(
    backend: &BotBackend,
    form: FormState,
) -> Result<Option<ResponseResult>, Rejection> {
    let snapshot = FormSnapshot::new(form);
    let started = reduce(&snapshot, FormEvent::SubmitStarted)?;

    let Some(Effect::Dispatch { attempt, request }) = started.effect else {
        return Ok(Some(ResponseResult::Fallback));
    };

    let event = match backend.run_bot(&request).await {
        Ok(reply) => FormEvent::SubmitSucceeded { attempt, reply },
        Err(err) => {
            tracing::warn!(attempt, code = err.error_code(), error = %err, "Run-bot request failed");
            FormEvent::SubmitFailed { attempt }
        }
    };

    let settled = reduce(&started.snapshot, event)?;
    Ok(settled.snapshot.result)
}

/// Print the result and map it to an outcome.
pub fn report<W: Write>(
    console: &mut Console<W>,
    result: Option<&ResponseResult>,
) -> io::Result<SubmitOutcome> {
    let Some(result) = result else {
        console.done(icons::WARNING, "The backend sent an empty reply")?;
        return Ok(SubmitOutcome::Failed);
    };
    if !result.is_success() {
        console.done(icons::FAILURE, &result.display_text())?;
        return Ok(SubmitOutcome::Failed);
    }
    console.done(icons::SUCCESS, &result.display_text())?;
    if let ResponseResult::Success { message: Some(message) } = result {
        console.step(" ", message)?;
    }
    Ok(SubmitOutcome::Succeeded)
}

/// Entry point for `jobbot submit`.
pub async fn handle_submit_command(
    backend: &BotBackend,
    args: &SubmitArgs,
    default_keywords: &str,
) -> io::Result<SubmitOutcome> {
    let form = collect_form(args, default_keywords, prompt_password)?;
    let mut console = Console::stdout();

    console.header("JOBBOT SUBMIT")?;
    console.step(icons::SUCCESS, &format!("Backend: {}", backend.base_url()))?;
    console.step(icons::SUCCESS, &format!("Keywords: {}", form.keyword_list().join(", ")))?;
    console.rule()?;

    console.pending("Running bot...")?;
    let outcome = match submit_once(backend, form).await {
        Ok(result) => report(&mut console, result.as_ref())?,
        Err(rejection) => {
            console.done(icons::WARNING, &rejection.to_string())?;
            SubmitOutcome::Invalid
        }
    };
    println!();

    tracing::info!(?outcome, "One-shot submit finished");
    Ok(outcome)
}
