use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::input::{EditorEvent, InputEvent, Key};

pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Check for available events with a timeout
    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    /// Read the next event; `None` for events the editor has no use for
    pub fn read(&mut self) -> io::Result<Option<EditorEvent>> {
        Ok(translate_event(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a crossterm event into an editor event.
///
/// A terminal has no close button, so Ctrl+Q and Ctrl+C stand in for it.
pub fn translate_event(event: Event) -> Option<EditorEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(cols, rows) => Some(EditorEvent::Resized(u32::from(cols), u32::from(rows))),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<EditorEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = key_event.modifiers;
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    let key = match key_event.code {
        KeyCode::Char(c) => {
            if ctrl && matches!(c.to_ascii_lowercase(), 'q' | 'c') {
                return Some(EditorEvent::Closed);
            }
            if !ctrl && !alt {
                return Some(EditorEvent::TextEntered(u32::from(c)));
            }
            Key::Char(c)
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        _ => return None,
    };

    Some(EditorEvent::KeyPressed(InputEvent {
        key,
        shift: shift || key_event.code == KeyCode::BackTab,
        alt,
        ctrl,
    }))
}
