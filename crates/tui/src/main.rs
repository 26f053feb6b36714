//! Sources TUI - Terminal user interface for the Sources inventory API.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Scripted access to the same API (see `crates/cli`).
//! - Configuration resolution rules (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - A `.env` file in the working directory is honored at startup.
//! - Configuration precedence: CLI args > env vars > defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use sources_tui::action::Action;
use sources_tui::app::{App, ConnectionContext};
use sources_tui::cli::Cli;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sources_config::ConfigLoader;
use sources_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};

use sources_tui::runtime::{
    client::create_client,
    side_effects::{TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    // Initialize file-based logging with configurable directory
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "sources-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    // Resolve configuration. Setters hold CLI overrides; `load` fills the
    // rest from .env, the environment, and defaults.
    let mut loader = ConfigLoader::new();
    loader.set_base_path(cli.base_path.clone());
    loader.set_account_number(cli.account.clone());
    loader.set_timeout(cli.timeout.map(Duration::from_secs));
    if cli.skip_verify {
        loader.set_skip_verify(Some(true));
    }
    let config = loader.load()?;

    let connection_ctx = ConnectionContext {
        base_path: config.connection.base_path.clone(),
        account_number: config.identity.account_number.clone(),
    };

    let client = Arc::new(create_client(&config)?);
    tracing::info!(base_path = %config.connection.base_path, "client ready");

    // Create task tracker for managing spawned tasks
    let task_tracker = TaskTracker::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create guard to ensure terminal restoration on panic/unwind.
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create bounded channel for actions with backpressure handling
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Spawn input stream task. Detached rather than tracked: it blocks on
    // the next terminal event, and shutdown must not wait for a keypress.
    let tx_input = tx.clone();
    tokio::spawn(async move {
        use crossterm::event::EventStream;

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            match event_result {
                Ok(event) => {
                    let action = match event {
                        crossterm::event::Event::Key(key) => {
                            if key.kind == crossterm::event::KeyEventKind::Press {
                                Some(Action::Input(key))
                            } else {
                                None
                            }
                        }
                        crossterm::event::Event::Resize(width, height) => {
                            Some(Action::Resize(width, height))
                        }
                        _ => None,
                    };

                    if let Some(action) = action {
                        // Key and resize events carry user intent, so block
                        // until the channel has room rather than dropping.
                        if tx_input.send(action).await.is_err() {
                            // Channel closed, exit task
                            break;
                        }
                    }
                }
                Err(_) => {
                    // Stream error, exit loop
                    break;
                }
            }
        }
    });

    let mut app = App::new(connection_ctx);

    // Kick off the initial loads. The type catalog arrives alongside the
    // source list so the type column and the wizard resolve names
    // without a separate fetch.
    handle_side_effects(
        Action::LoadSourceTypes,
        client.clone(),
        tx.clone(),
        task_tracker.clone(),
    )
    .await;
    handle_side_effects(
        Action::LoadSources,
        client.clone(),
        tx.clone(),
        task_tracker.clone(),
    )
    .await;

    // Create UI tick interval for smooth animations
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                // Check for quit first
                if matches!(action, Action::Quit) {
                    break;
                }

                if let Action::Input(key) = action {
                    if let Some(a) = app.handle_input(key) {
                        // Check for quit immediately after input handling
                        if matches!(a, Action::Quit) {
                            break;
                        }
                        app.update(a.clone());
                        handle_side_effects(a, client.clone(), tx.clone(), task_tracker.clone())
                            .await;
                    }
                } else {
                    app.update(action.clone());
                    handle_side_effects(action, client.clone(), tx.clone(), task_tracker.clone())
                        .await;
                }
            }
            _ = tick_interval.tick() => {
                // Always process tick for toast TTL pruning and animations
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: close tracker and wait for tasks
    let _ = task_tracker.close();
    task_tracker.wait().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
