//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::startup::StartupConfig;

/// Terminal client for the LinkedIn job bot backend.
///
/// Without a subcommand, opens the interactive form.
#[derive(Debug, Parser)]
#[command(name = "jobbot", version, about)]
pub struct Args {
    /// Base URL of the bot backend
    #[arg(long, env = "JOBBOT_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Where to write the log (defaults to the platform data directory)
    #[arg(long, env = "JOBBOT_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Initial value of the job keywords field
    #[arg(long, env = "JOBBOT_KEYWORDS")]
    pub keywords: Option<String>,

    /// Do not probe the backend on startup
    #[arg(long)]
    pub no_health_check: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Submit the form once and print the result
    Submit(SubmitArgs),
    /// Check that the backend is reachable
    Ping,
}

/// Field values for `jobbot submit`.
///
/// Passwords may be given here, but omitting them prompts without echo.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
pub struct SubmitArgs {
    #[arg(long, env = "JOBBOT_LINKEDIN_EMAIL")]
    pub linkedin_email: Option<String>,

    #[arg(long, env = "JOBBOT_LINKEDIN_PASSWORD", hide_env_values = true)]
    pub linkedin_password: Option<String>,

    /// Address that receives the job links
    #[arg(long, env = "JOBBOT_USER_EMAIL")]
    pub user_email: Option<String>,

    /// App password for the receiving mailbox
    #[arg(long, env = "JOBBOT_EMAIL_PASSWORD", hide_env_values = true)]
    pub email_password: Option<String>,

    /// Job keywords, comma separated
    #[arg(long = "keywords", id = "submit_keywords")]
    pub keywords: Option<String>,
}

impl Args {
    /// Layer the parsed flags over [`StartupConfig::from_env`].
    pub fn to_config(&self) -> StartupConfig {
        let mut config = StartupConfig::from_env().with_skip_health_check(self.no_health_check);
        if let Some(ref url) = self.backend_url {
            config = config.with_backend_url(url.as_str());
        }
        if let Some(ref path) = self.log_file {
            config = config.with_log_file(path.clone());
        }
        if let Some(ref keywords) = self.keywords {
            config = config.with_default_keywords(keywords.as_str());
        }
        config
    }
}
