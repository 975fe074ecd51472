mod app;
mod config;
mod logging;
mod timer;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::WindowPlacement;
use crate::timer::ticker::Ticker;
use crate::timer::TimerEvent;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), version = env!("CARGO_PKG_VERSION"), "crabtimer starting");
    }

    let saved = config::placement::load_placement();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Timer"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, saved).await;

    // Restore terminal
    restore_terminal()?;

    match result {
        Ok(placement) => {
            if let Err(e) = config::placement::save_placement(&placement) {
                warn!("could not save window placement: {:#}", e);
                eprintln!("Warning: {:#}", e);
            }
            info!(?placement, "crabtimer stopped");
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Drive the UI until quit. Returns the placement of the last visible
/// screen.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    saved: Option<WindowPlacement>,
) -> Result<WindowPlacement> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let size = terminal.size()?;
    let viewport = Rect::new(0, 0, size.width, size.height);

    // Countdown transitions come back through the event loop
    let observer_tx = event_tx.clone();
    let observer = Box::new(move |event: TimerEvent| {
        let _ = observer_tx.send(AppEvent::Timer(event));
    });

    let mut state = AppState::new(cfg.clone(), saved, viewport, observer);
    let mut ticker = Ticker::new(
        Duration::from_millis(cfg.timer.tick_millis.max(1)),
        event_tx.clone(),
    );

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::StartTicker { generation } => ticker.start(generation),
                Action::StopTicker => ticker.stop(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    ticker.stop();
    Ok(state.screens.active_placement())
}
