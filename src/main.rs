//! visionary - a minimal single-buffer text editor
//!
//! This is the main entry point. It parses CLI arguments, sets up logging
//! and delegates to the terminal or GUI mode runner.

use clap::Parser;
use tracing::{error, info};

use visionary::cli::Cli;
use visionary::config::Config;
use visionary::log::{self, LogConfig};
use visionary::run::{self, EditorMode};
use visionary::user_config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::default();
    user_config::configure(&mut config);

    // Apply CLI overrides
    cli.apply_to_config(&mut config);

    let log_guard = log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    })?;

    // Determine mode
    let mode = match cli.forced_mode() {
        Some(mode) => mode,
        None => run::detect_mode()?,
    };
    info!(?mode, log_file = %log_guard.log_file.display(), "starting visionary");

    // Run in appropriate mode
    let result = match mode {
        EditorMode::Terminal => run::run_terminal_mode(&config),
        EditorMode::Gui => run::run_gui_mode(&config),
    };

    if let Err(e) = &result {
        error!("visionary exited with an error: {}", e);
    }
    result
}
