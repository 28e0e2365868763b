//! Startup: configuration, logging and building the app.
//!
//! - [`config`] - [`StartupConfig`] and its environment layer
//! - [`logging`] - file-backed `tracing` subscriber

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::{default_log_path, init_logging};

use std::sync::Arc;

use crate::app::App;
use crate::backend::BotBackend;
use crate::models::FormState;
use crate::traits::HttpClient;

/// Backend client for `config` over the given HTTP seam.
pub fn build_backend(config: &StartupConfig, http: Arc<dyn HttpClient>) -> BotBackend {
    BotBackend::new(&config.backend_url, http)
}

/// Backend client for `config` over reqwest.
pub fn build_reqwest_backend(config: &StartupConfig) -> BotBackend {
    BotBackend::with_reqwest(config.backend_url.as_str())
}

/// Fresh app with the configured default keywords.
pub fn build_app(config: &StartupConfig, backend: BotBackend) -> App {
    App::new(backend, FormState::with_keywords(&config.default_keywords))
}
