use std::fmt;
use std::str::FromStr;

/// Native key representation for visionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "Enter"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Tab => write!(f, "Tab"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ENTER" | "RET" | "RETURN" => Ok(Key::Enter),
            "TAB" => Ok(Key::Tab),
            "BACKSPACE" | "BS" => Ok(Key::Backspace),
            "HOME" => Ok(Key::Home),
            "END" => Ok(Key::End),
            "UP" => Ok(Key::Up),
            "DOWN" => Ok(Key::Down),
            "LEFT" => Ok(Key::Left),
            "RIGHT" => Ok(Key::Right),
            _ => {
                // Single raw character, case preserved
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(format!("Unknown key: {}", s)),
                }
            }
        }
    }
}

/// A key press together with the modifier state observed at the time.
///
/// Modifiers are carried through to the dispatcher but no binding looks at
/// them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl InputEvent {
    /// A key press with no modifiers held
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            shift: false,
            alt: false,
            ctrl: false,
        }
    }
}

/// Events a frontend feeds into the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The window (or terminal session) was asked to close
    Closed,
    /// A key went down
    KeyPressed(InputEvent),
    /// Text input, as a raw code point
    TextEntered(u32),
    /// The drawable area changed size (columns/rows or pixels)
    Resized(u32, u32),
}

/// Code points the editor accepts from text input: printable ASCII.
pub fn printable_char(code_point: u32) -> Option<char> {
    if (32..127).contains(&code_point) {
        char::from_u32(code_point)
    } else {
        None
    }
}
