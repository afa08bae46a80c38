//! Main TUI runner - entry point and event loop

use std::path::PathBuf;
use std::time::Duration;

use drcrop_app::process::process_message;
use drcrop_app::{ActionContext, AppState, DiagnosisEngine, Message, Screen};
use drcrop_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// `start` is the first screen; opening `Screen::Results` without a stored
/// session lands on the dashboard instead.
pub async fn run<E>(
    mut state: AppState,
    engine: E,
    reports_dir: PathBuf,
    start: Screen,
) -> Result<()>
where
    E: DiagnosisEngine + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let ctx = ActionContext::new(msg_tx, engine, reports_dir);

    let tick_rate = Duration::from_millis(state.settings.ui.tick_rate_ms.max(10));
    info!(
        "Starting on {:?} (tick {}ms)",
        start,
        tick_rate.as_millis()
    );

    process_message(&mut state, Message::Navigate(start), &ctx);

    let result = run_loop(&mut term, &mut state, msg_rx, &ctx, tick_rate);

    terminal::restore();
    info!("Dr. Crop exiting");
    result
}

/// Main event loop
fn run_loop<E>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &ActionContext<E>,
    tick_rate: Duration,
) -> Result<()>
where
    E: DiagnosisEngine + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message, ctx);
        }
    }

    Ok(())
}
