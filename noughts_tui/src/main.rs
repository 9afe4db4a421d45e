//! Terminal UI for noughts.
//!
//! Owns the [`noughts_core::Session`] and drives it from keyboard
//! input. The computer's delayed move is a spawned timer task that
//! sends its generation token back over a channel; the core drops the
//! token if a restart or mode switch got there first.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// How long the computer "thinks" before its move lands.
const THINKING_DELAY: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    // Timer tasks report back here when the computer's move is due.
    let (due_tx, mut due_rx) = mpsc::unbounded_channel::<u64>();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Resolve any computer moves whose delay has elapsed.
        while let Ok(token) = due_rx.try_recv() {
            app.computer_move_due(token);
        }

        // Check for keyboard input.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let KeyCode::Char(c) = key.code {
                    if let Some(token) = app.handle_key(c) {
                        schedule_computer_move(due_tx.clone(), token);
                    }
                }
            }
        }

        if app.should_quit() {
            info!("Quitting");
            return Ok(());
        }
    }
}

/// Spawns the delayed computer move for the given generation token.
fn schedule_computer_move(due_tx: mpsc::UnboundedSender<u64>, token: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(THINKING_DELAY).await;
        // Receiver gone means the app is shutting down.
        let _ = due_tx.send(token);
    });
}
