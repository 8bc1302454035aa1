//! Main TUI runner - entry point for the terminal application

use std::time::{Duration, Instant};

use pcsim_app::config::Settings;
use pcsim_app::{process_message, signals, AppState, Message};
use pcsim_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the simulator until the user quits or the window goes away.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        ratatui::restore();
        return Err(e);
    }

    let frame_interval = settings.ui.frame_interval();
    let mut state = AppState::with_settings(settings);

    // Message channel for OS signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, frame_interval);

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();

    result
}

/// Main event loop
///
/// Ticks are sent on a fixed cadence even while input keeps arriving, so
/// the boot timer fires on time during a stream of mouse motion.
fn run_loop(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    frame_interval: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    process_message(
        state,
        Message::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let mut last_tick = Instant::now();

    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        let timeout = frame_interval.saturating_sub(last_tick.elapsed());
        if let Some(message) = event::poll(timeout)? {
            process_message(state, message);
        }

        if last_tick.elapsed() >= frame_interval {
            process_message(state, Message::Tick);
            last_tick = Instant::now();
        }
    }

    info!("Event loop finished");
    Ok(())
}
