//! Named editor commands.
//!
//! Key bindings map key names to these command names; the dispatcher looks
//! the command up and runs it against the editor.

use std::fmt;
use std::str::FromStr;

use crate::core::editor::Editor;
use crate::core::error::EditError;

/// Delimiter used for vertical movement
pub const LINE_DELIMITER: char = '\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertNewline,
    InsertTab,
    DeletePreviousCharacter,
    BackwardCharacter,
    ForwardCharacter,
    PreviousLine,
    NextLine,
    BeginningOfFile,
    EndOfFile,
    Exit,
}

/// What running a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Buffer or caret changed
    Changed,
    /// Nothing to do (at a boundary, no delimiter found)
    Unchanged,
    /// Session should end
    Exit,
}

impl From<bool> for CommandOutcome {
    fn from(moved: bool) -> Self {
        if moved {
            CommandOutcome::Changed
        } else {
            CommandOutcome::Unchanged
        }
    }
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::InsertNewline,
        Command::InsertTab,
        Command::DeletePreviousCharacter,
        Command::BackwardCharacter,
        Command::ForwardCharacter,
        Command::PreviousLine,
        Command::NextLine,
        Command::BeginningOfFile,
        Command::EndOfFile,
        Command::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::InsertNewline => "insert-newline",
            Command::InsertTab => "insert-tab",
            Command::DeletePreviousCharacter => "delete-previous-character",
            Command::BackwardCharacter => "backward-character",
            Command::ForwardCharacter => "forward-character",
            Command::PreviousLine => "previous-line",
            Command::NextLine => "next-line",
            Command::BeginningOfFile => "beginning-of-file",
            Command::EndOfFile => "end-of-file",
            Command::Exit => "exit",
        }
    }

    /// Run the command against `editor`.
    pub fn execute(self, editor: &mut Editor) -> Result<CommandOutcome, EditError> {
        let outcome = match self {
            Command::InsertNewline => {
                editor.insert('\n')?;
                CommandOutcome::Changed
            }
            Command::InsertTab => {
                editor.insert('\t')?;
                CommandOutcome::Changed
            }
            Command::DeletePreviousCharacter => {
                let before = editor.caret();
                editor.delete_before_caret()?;
                (editor.caret() != before).into()
            }
            Command::BackwardCharacter => editor.move_left().into(),
            Command::ForwardCharacter => editor.move_right().into(),
            Command::PreviousLine => editor.move_to_line_start(LINE_DELIMITER).into(),
            Command::NextLine => editor.move_to_line_end(LINE_DELIMITER).into(),
            Command::BeginningOfFile => {
                let before = editor.caret();
                editor.jump_to_buffer_start();
                (editor.caret() != before).into()
            }
            Command::EndOfFile => {
                let before = editor.caret();
                editor.jump_to_buffer_end();
                (editor.caret() != before).into()
            }
            Command::Exit => CommandOutcome::Exit,
        };
        Ok(outcome)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
        assert!("kill-region".parse::<Command>().is_err());
    }

    #[test]
    fn test_insert_commands() {
        let mut editor = Editor::new("ab", 1);
        assert_eq!(
            Command::InsertNewline.execute(&mut editor),
            Ok(CommandOutcome::Changed)
        );
        assert_eq!(
            Command::InsertTab.execute(&mut editor),
            Ok(CommandOutcome::Changed)
        );
        assert_eq!(editor.text(), "a\n\tb");
        assert_eq!(editor.caret(), 3);
    }

    #[test]
    fn test_delete_at_start_is_unchanged() {
        let mut editor = Editor::new("ab", 0);
        assert_eq!(
            Command::DeletePreviousCharacter.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
    }

    #[test]
    fn test_vertical_movement_uses_newline() {
        let mut editor = Editor::new("ab\ncd", 4);
        assert_eq!(
            Command::PreviousLine.execute(&mut editor),
            Ok(CommandOutcome::Changed)
        );
        assert_eq!(editor.caret(), 2);
        assert_eq!(
            Command::PreviousLine.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
        assert_eq!(
            Command::NextLine.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
    }

    #[test]
    fn test_buffer_jumps_report_movement() {
        let mut editor = Editor::new("ab\n", 1);
        assert_eq!(
            Command::BeginningOfFile.execute(&mut editor),
            Ok(CommandOutcome::Changed)
        );
        assert_eq!(
            Command::BeginningOfFile.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
        assert_eq!(
            Command::EndOfFile.execute(&mut editor),
            Ok(CommandOutcome::Changed)
        );
        assert_eq!(editor.caret(), 2);
        assert_eq!(
            Command::EndOfFile.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
    }

    #[test]
    fn test_buffer_jumps_on_empty_buffer() {
        let mut editor = Editor::new("", 0);
        assert_eq!(
            Command::BeginningOfFile.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
        assert_eq!(
            Command::EndOfFile.execute(&mut editor),
            Ok(CommandOutcome::Unchanged)
        );
        assert_eq!(editor.caret(), 0);
    }

    #[test]
    fn test_exit() {
        let mut editor = Editor::default();
        assert_eq!(Command::Exit.execute(&mut editor), Ok(CommandOutcome::Exit));
        assert_eq!(editor.text(), "Hello, World!\n");
    }
}
