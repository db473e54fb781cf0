//! Command-line argument parsing for visionary.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and the overrides they apply to the configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::run::EditorMode;

/// Command-line interface configuration.
#[derive(Debug, Default, Parser)]
#[command(name = "visionary", version, about = "A minimal single-buffer text editor")]
pub struct Cli {
    /// Force GUI mode
    #[arg(short, long, conflicts_with = "terminal")]
    pub gui: bool,

    /// Force terminal mode
    #[arg(short, long)]
    pub terminal: bool,

    /// Font file used by the GUI
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Text size in pixels (GUI)
    #[arg(long, value_name = "PX")]
    pub font_size: Option<u16>,

    /// Write logs to this file, or into this directory
    #[arg(long, value_name = "PATH", env = "VISIONARY_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Mode forced on the command line, if any
    pub fn forced_mode(&self) -> Option<EditorMode> {
        if self.gui {
            Some(EditorMode::Gui)
        } else if self.terminal {
            Some(EditorMode::Terminal)
        } else {
            None
        }
    }

    /// Apply CLI overrides to a configuration object.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(font) = &self.font {
            config.set("font_path", font.to_string_lossy().into_owned());
        }
        if let Some(size) = self.font_size {
            config.set("font_size", i64::from(size));
        }
    }
}
