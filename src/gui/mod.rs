//! GUI module for visionary using wgpu + winit + fontdue
//!
//! Architecture: frames are composed on the CPU
//! - fontdue rasterizes glyph coverage masks
//! - `Canvas` paints text and caret into an RGBA buffer
//! - `Renderer` uploads the buffer and blits it with one triangle

pub mod canvas;
pub mod font;
pub mod input;
pub mod renderer;

pub use renderer::Renderer;

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 30.0;

/// Font loaded when no path is configured
pub const DEFAULT_FONT_PATH: &str = "Fonts/anon.ttf";
