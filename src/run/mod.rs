//! Application execution modes for visionary.
//!
//! - Terminal mode draws the buffer with crossterm
//! - GUI mode opens a window and draws with wgpu

mod frame;
mod tui;

#[cfg(feature = "gui")]
mod gui;

use std::io::IsTerminal;

pub use frame::FrameLimiter;
pub use tui::run_terminal_mode;

#[cfg(feature = "gui")]
pub use gui::run_gui_mode;

#[cfg(not(feature = "gui"))]
pub fn run_gui_mode(_config: &crate::config::Config) -> Result<(), Box<dyn std::error::Error>> {
    Err("GUI mode requires the 'gui' feature to be enabled. \
         Rebuild with: cargo build --features gui"
        .into())
}

/// Editor execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Terminal,
    Gui,
}

/// Detect the appropriate editor mode based on environment.
pub fn detect_mode() -> Result<EditorMode, Box<dyn std::error::Error>> {
    let is_stdin_tty = std::io::stdin().is_terminal();
    detect_mode_internal(is_stdin_tty, |k| std::env::var(k))
}

/// Internal mode detection with injectable environment lookup.
pub fn detect_mode_internal<F>(
    is_stdin_tty: bool,
    get_env: F,
) -> Result<EditorMode, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let has_display = get_env("DISPLAY").is_ok() || get_env("WAYLAND_DISPLAY").is_ok();
    if has_display && cfg!(feature = "gui") {
        return Ok(EditorMode::Gui);
    }

    if is_stdin_tty {
        return Ok(EditorMode::Terminal);
    }

    Err("No display server and stdin is not a terminal; \
         pass --gui or --terminal to choose a mode"
        .into())
}
