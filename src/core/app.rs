//! This module defines `EditorApp`, the state of one editing session: the
//! editor itself, the dispatcher built from the configured key bindings, and
//! the layout settings every frontend renders with.

use tracing::{debug, info};

use crate::config::Config;
use crate::core::dispatcher::{DispatchResult, Dispatcher};
use crate::core::editor::{DEFAULT_CARET, DEFAULT_TEXT, Editor};
use crate::core::error::EditError;
use crate::core::input::EditorEvent;
use crate::core::layout::DEFAULT_TAB_WIDTH;

pub struct EditorApp {
    pub editor: Editor,
    pub dispatcher: Dispatcher,
    /// Spaces a tab advances by when laid out
    pub tab_width: usize,
}

impl EditorApp {
    /// Build the session described by `config`.
    pub fn initialize_with_config(config: &Config) -> Self {
        let text = config.get_string("initial_text").unwrap_or(DEFAULT_TEXT);
        let caret = config
            .get_int_as::<usize>("initial_caret")
            .unwrap_or(DEFAULT_CARET);
        let tab_width = config
            .get_int_as::<usize>("tab_width")
            .unwrap_or(DEFAULT_TAB_WIDTH);

        let dispatcher = Dispatcher::from_bindings(&config.keybindings);
        for (key, value) in &config.settings {
            debug!(%key, %value, "setting");
        }
        info!(
            bindings = config.keybindings.len(),
            caret, tab_width, "editor session ready"
        );

        Self {
            editor: Editor::new(text, caret),
            dispatcher,
            tab_width,
        }
    }

    /// Feed one frontend event through the dispatcher.
    pub fn handle_event(&mut self, event: &EditorEvent) -> Result<DispatchResult, EditError> {
        self.dispatcher.dispatch(&mut self.editor, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, Key};

    #[test]
    fn test_empty_config_has_no_bindings() {
        let mut app = EditorApp::initialize_with_config(&Config::default());
        let result = app.handle_event(&EditorEvent::KeyPressed(InputEvent::plain(Key::Enter)));
        assert_eq!(result, Ok(DispatchResult::NotHandled));
        assert_eq!(app.editor.text(), DEFAULT_TEXT);
    }

    #[test]
    fn test_initialize_with_config() {
        let mut config = Config::default();
        config.set("initial_text", "one\ntwo");
        config.set("initial_caret", 5_i64);
        config.set("tab_width", 8_i64);
        config.bind("Up", "previous-line");

        let mut app = EditorApp::initialize_with_config(&config);
        assert_eq!(app.editor.text(), "one\ntwo");
        assert_eq!(app.editor.caret(), 5);
        assert_eq!(app.tab_width, 8);

        let result = app.handle_event(&EditorEvent::KeyPressed(InputEvent::plain(Key::Up)));
        assert_eq!(result, Ok(DispatchResult::Success));
        assert_eq!(app.editor.caret(), 3);
    }

    #[test]
    fn test_negative_settings_fall_back_to_defaults() {
        let mut config = Config::default();
        config.set("initial_caret", -4_i64);
        config.set("tab_width", -1_i64);

        let app = EditorApp::initialize_with_config(&config);
        assert_eq!(app.editor.caret(), DEFAULT_CARET);
        assert_eq!(app.tab_width, DEFAULT_TAB_WIDTH);
    }
}
