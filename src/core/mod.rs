//! Editor core: the buffer/caret model and the input dispatcher.
//!
//! Nothing in here knows about windows or terminals; frontends translate
//! their events into [`input::EditorEvent`] and render from [`editor::Editor`]
//! through [`layout::TextLayout`].

pub mod app;
pub mod buffer;
pub mod command;
pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod input;
pub mod layout;
