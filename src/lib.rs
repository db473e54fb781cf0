pub mod cli;
pub mod config;
pub mod core;
pub mod log;
pub mod run;
pub mod terminal;
pub mod user_config;

#[cfg(feature = "gui")]
pub mod gui;
