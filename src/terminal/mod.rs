//! Terminal frontend: raw mode, crossterm event translation and drawing.

pub mod events;
pub mod raw;
pub mod render;
