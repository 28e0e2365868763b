//! Command-line interface.
//!
//! - [`args`] - clap definitions and layering over the environment
//! - [`submit`] - one-shot submission
//! - [`ping`] - backend reachability
//! - [`output`] - status lines for one-shot commands

pub mod args;
pub mod output;
pub mod ping;
pub mod submit;

pub use args::{Args, CliCommand, SubmitArgs};
pub use ping::handle_ping_command;
pub use submit::{handle_submit_command, submit_once, SubmitOutcome};

use color_eyre::Result;

use crate::backend::BotBackend;
use crate::startup::StartupConfig;

/// Run a non-interactive command and return the process exit status.
pub async fn run_cli_command(
    command: &CliCommand,
    config: &StartupConfig,
    backend: &BotBackend,
) -> Result<i32> {
    match command {
        CliCommand::Submit(args) => {
            let outcome = handle_submit_command(backend, args, &config.default_keywords).await?;
            Ok(outcome.exit_code())
        }
        CliCommand::Ping => Ok(handle_ping_command(backend).await),
    }
}
