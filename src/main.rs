//! jobbot: terminal client for the LinkedIn job bot backend.

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

use jobbot::app::{App, AppMessage};
use jobbot::cli::{run_cli_command, Args};
use jobbot::startup::{build_app, build_reqwest_backend, init_logging};
use jobbot::terminal::{setup_panic_hook, TerminalManager};
use jobbot::ui;

/// Event loop tick; drives spinner animation.
const TICK: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = args.to_config();
    init_logging(config.log_file.as_deref())?;
    tracing::info!(backend = %config.backend_url, "Starting jobbot");

    let backend = build_reqwest_backend(&config);

    if let Some(ref command) = args.command {
        let code = run_cli_command(command, &config, &backend).await?;
        std::process::exit(code);
    }

    setup_panic_hook();

    let mut app = build_app(&config, backend);
    if !config.skip_health_check {
        app.start_health_check();
    }

    let mut term_manager = TerminalManager::new()?;
    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;

    tracing::info!("jobbot exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so select! can borrow it next to `app`
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "Terminal event stream error");
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
