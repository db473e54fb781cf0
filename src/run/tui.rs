//! Terminal (TUI) mode implementation.

use std::io;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::Config;
use crate::core::app::EditorApp;
use crate::core::dispatcher::DispatchResult;
use crate::core::input::EditorEvent;
use crate::run::frame::{DEFAULT_FRAME_RATE, FrameLimiter};
use crate::terminal;

/// Longest the loop sleeps in `poll` when nothing needs drawing
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Run in terminal (TUI) mode.
pub fn run_terminal_mode(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = EditorApp::initialize_with_config(config);
    let mut limiter = FrameLimiter::new(
        config
            .get_int_as::<u32>("frame_rate")
            .unwrap_or(DEFAULT_FRAME_RATE),
    );

    let _raw_mode = terminal::raw::RawMode::new()?;
    let mut size = crossterm::terminal::size()?;
    let mut stdout = io::stdout();
    info!(cols = size.0, rows = size.1, "terminal mode started");

    let mut event_handler = terminal::events::EventHandler::new();
    let mut dirty = true;
    loop {
        let now = Instant::now();
        if dirty && limiter.ready(now) {
            terminal::render::render_editor(&mut stdout, &app.editor, app.tab_width, size)?;
            limiter.mark(now);
            dirty = false;
        }

        let timeout = if dirty {
            limiter.wait_time(Instant::now(), IDLE_POLL)
        } else {
            IDLE_POLL
        };
        if !event_handler.poll(timeout)? {
            continue;
        }

        let Some(event) = event_handler.read()? else {
            continue;
        };
        if let EditorEvent::Resized(cols, rows) = event {
            size = (
                u16::try_from(cols).unwrap_or(u16::MAX),
                u16::try_from(rows).unwrap_or(u16::MAX),
            );
        }

        match app.handle_event(&event)? {
            DispatchResult::Exit => {
                info!("terminal mode closed");
                break;
            }
            DispatchResult::Success => dirty = true,
            DispatchResult::NotHandled => debug!(?event, "event not handled"),
        }
    }
    Ok(())
}
