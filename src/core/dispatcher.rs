use std::collections::HashMap;

use tracing::{debug, warn};

use crate::core::command::{Command, CommandOutcome};
use crate::core::editor::Editor;
use crate::core::error::EditError;
use crate::core::input::{EditorEvent, InputEvent, Key, printable_char};

/// Result of event dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was applied; redraw
    Success,
    /// Nothing bound, nothing printable, or nothing to do
    NotHandled,
    /// Exit requested
    Exit,
}

impl From<CommandOutcome> for DispatchResult {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Changed => DispatchResult::Success,
            CommandOutcome::Unchanged => DispatchResult::NotHandled,
            CommandOutcome::Exit => DispatchResult::Exit,
        }
    }
}

/// Maps frontend events onto editor operations.
///
/// Key presses go through the binding table; text input is inserted when it
/// is printable ASCII and dropped otherwise. Modifier state does not take
/// part in the lookup.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    bindings: HashMap<Key, Command>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dispatcher from `key name -> command name` pairs.
    ///
    /// Pairs that fail to parse are skipped with a warning.
    pub fn from_bindings<'a, I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut dispatcher = Self::new();
        for (key_name, command_name) in bindings {
            let key = match key_name.parse::<Key>() {
                Ok(key) => key,
                Err(e) => {
                    warn!(binding = %key_name, "ignoring key binding: {}", e);
                    continue;
                }
            };
            match command_name.parse::<Command>() {
                Ok(command) => dispatcher.bind(key, command),
                Err(e) => warn!(binding = %key_name, "ignoring key binding: {}", e),
            }
        }
        dispatcher
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn lookup(&self, key: Key) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    /// Apply one event to `editor`.
    pub fn dispatch(
        &self,
        editor: &mut Editor,
        event: &EditorEvent,
    ) -> Result<DispatchResult, EditError> {
        match event {
            EditorEvent::Closed => Ok(DispatchResult::Exit),
            EditorEvent::KeyPressed(input) => self.dispatch_key(editor, input),
            EditorEvent::TextEntered(code_point) => match printable_char(*code_point) {
                Some(ch) => {
                    editor.insert(ch)?;
                    Ok(DispatchResult::Success)
                }
                None => Ok(DispatchResult::NotHandled),
            },
            EditorEvent::Resized(..) => Ok(DispatchResult::Success),
        }
    }

    fn dispatch_key(
        &self,
        editor: &mut Editor,
        input: &InputEvent,
    ) -> Result<DispatchResult, EditError> {
        let Some(command) = self.lookup(input.key) else {
            return Ok(DispatchResult::NotHandled);
        };
        debug!(key = %input.key, %command, caret = editor.caret(), "dispatch");
        Ok(command.execute(editor)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_dispatcher() -> Dispatcher {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind(Key::Enter, Command::InsertNewline);
        dispatcher.bind(Key::Left, Command::BackwardCharacter);
        dispatcher.bind(Key::Backspace, Command::DeletePreviousCharacter);
        dispatcher
    }

    fn press(key: Key) -> EditorEvent {
        EditorEvent::KeyPressed(InputEvent::plain(key))
    }

    #[test]
    fn test_dispatch_bound_key() {
        let dispatcher = setup_dispatcher();
        let mut editor = Editor::new("ab", 1);
        let result = dispatcher.dispatch(&mut editor, &press(Key::Enter));
        assert_eq!(result, Ok(DispatchResult::Success));
        assert_eq!(editor.text(), "a\nb");
    }

    #[test]
    fn test_dispatch_unbound_key() {
        let dispatcher = setup_dispatcher();
        let mut editor = Editor::new("ab", 1);
        let result = dispatcher.dispatch(&mut editor, &press(Key::End));
        assert_eq!(result, Ok(DispatchResult::NotHandled));
        assert_eq!(editor.caret(), 1);
    }

    #[test]
    fn test_modifiers_do_not_change_lookup() {
        let dispatcher = setup_dispatcher();
        let mut editor = Editor::new("ab", 2);
        let event = EditorEvent::KeyPressed(InputEvent {
            key: Key::Left,
            shift: true,
            alt: false,
            ctrl: true,
        });
        assert_eq!(
            dispatcher.dispatch(&mut editor, &event),
            Ok(DispatchResult::Success)
        );
        assert_eq!(editor.caret(), 1);
    }

    #[test]
    fn test_move_at_boundary_is_not_handled() {
        let dispatcher = setup_dispatcher();
        let mut editor = Editor::new("ab", 0);
        assert_eq!(
            dispatcher.dispatch(&mut editor, &press(Key::Left)),
            Ok(DispatchResult::NotHandled)
        );
    }

    #[test]
    fn test_text_entered() {
        let dispatcher = setup_dispatcher();
        let mut editor = Editor::new("", 0);
        assert_eq!(
            dispatcher.dispatch(&mut editor, &EditorEvent::TextEntered(u32::from('q'))),
            Ok(DispatchResult::Success)
        );
        assert_eq!(
            dispatcher.dispatch(&mut editor, &EditorEvent::TextEntered(7)),
            Ok(DispatchResult::NotHandled)
        );
        assert_eq!(
            dispatcher.dispatch(&mut editor, &EditorEvent::TextEntered(u32::from('\r'))),
            Ok(DispatchResult::NotHandled)
        );
        assert_eq!(editor.text(), "q");
        assert_eq!(editor.caret(), 1);
    }

    #[test]
    fn test_dispatch_close() {
        let dispatcher = Dispatcher::new();
        let mut editor = Editor::default();
        assert_eq!(
            dispatcher.dispatch(&mut editor, &EditorEvent::Closed),
            Ok(DispatchResult::Exit)
        );
    }

    #[test]
    fn test_from_bindings_skips_bad_entries() {
        let bindings: HashMap<String, String> = [
            ("Enter", "insert-newline"),
            ("Hyper", "insert-tab"),
            ("Tab", "no-such-command"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let dispatcher = Dispatcher::from_bindings(&bindings);
        assert_eq!(dispatcher.lookup(Key::Enter), Some(Command::InsertNewline));
        assert_eq!(dispatcher.lookup(Key::Tab), None);
    }
}
