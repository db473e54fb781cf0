//! Input translation layer for GUI mode
//!
//! Translates winit keyboard events into editor events: named keys become
//! key presses, and whatever text the key produced follows as text input.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::core::input::{EditorEvent, InputEvent, Key};

/// Convert a winit physical key to a named key.
///
/// Character keys return `None`; their characters arrive as text.
pub fn winit_key_to_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };
    let key = match code {
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}

/// Create an InputEvent from key information
pub fn create_input_event(key: Key, mods: ModifiersState) -> InputEvent {
    InputEvent {
        key,
        shift: mods.shift_key(),
        alt: mods.alt_key(),
        ctrl: mods.control_key(),
    }
}

/// Check if a key event should be processed (key down and repeats)
pub fn should_process(state: ElementState) -> bool {
    state == ElementState::Pressed
}

/// Editor events for one key press: the key itself, then its text.
pub fn key_events(
    physical_key: PhysicalKey,
    text: Option<&str>,
    mods: ModifiersState,
) -> Vec<EditorEvent> {
    let mut events = Vec::new();
    if let Some(key) = winit_key_to_key(physical_key) {
        events.push(EditorEvent::KeyPressed(create_input_event(key, mods)));
    }
    if let Some(text) = text {
        events.extend(text.chars().map(|ch| EditorEvent::TextEntered(u32::from(ch))));
    }
    events
}
