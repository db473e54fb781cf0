//! Editor Properties
//!
//! Algebraic properties of the buffer/caret model, checked over generated
//! buffers and caret offsets.

use proptest::prelude::*;
use visionary::core::command::LINE_DELIMITER;
use visionary::core::editor::Editor;

/// Printable ASCII plus newlines and tabs
fn buffer_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~\n\t]{0,64}").unwrap()
}

/// A buffer and a caret offset within it
fn editor_state() -> impl Strategy<Value = (String, usize)> {
    buffer_text().prop_flat_map(|text| {
        let len = text.chars().count();
        (Just(text), 0..=len)
    })
}

proptest! {
    #[test]
    fn left_then_right_restores_caret((text, caret) in editor_state()) {
        prop_assume!(caret > 0);
        let mut editor = Editor::new(&text, caret);

        prop_assert!(editor.move_left());
        prop_assert!(editor.move_right());
        prop_assert_eq!(editor.caret(), caret);
    }

    #[test]
    fn right_then_left_restores_caret((text, caret) in editor_state()) {
        prop_assume!(caret < text.chars().count());
        let mut editor = Editor::new(&text, caret);

        prop_assert!(editor.move_right());
        prop_assert!(editor.move_left());
        prop_assert_eq!(editor.caret(), caret);
    }

    #[test]
    fn insert_then_delete_restores_state(
        (text, caret) in editor_state(),
        ch in proptest::char::range(' ', '~'),
    ) {
        let mut editor = Editor::new(&text, caret);

        editor.insert(ch).unwrap();
        prop_assert_eq!(editor.caret(), caret + 1);
        prop_assert_eq!(editor.buffer().char_at(caret), Some(ch));

        editor.delete_before_caret().unwrap();
        prop_assert_eq!(editor.text(), text);
        prop_assert_eq!(editor.caret(), caret);
    }

    #[test]
    fn caret_stays_in_bounds(
        (text, caret) in editor_state(),
        steps in proptest::collection::vec(0u8..7, 0..40),
    ) {
        let mut editor = Editor::new(&text, caret);
        for step in steps {
            match step {
                0 => { editor.move_left(); }
                1 => { editor.move_right(); }
                2 => { editor.move_to_line_start(LINE_DELIMITER); }
                3 => { editor.move_to_line_end(LINE_DELIMITER); }
                4 => editor.insert('x').unwrap(),
                5 => editor.delete_before_caret().unwrap(),
                _ => editor.jump_to_buffer_end(),
            }
            prop_assert!(editor.caret() <= editor.buffer().len());
        }
    }

    #[test]
    fn line_moves_land_on_delimiters((text, caret) in editor_state()) {
        let mut editor = Editor::new(&text, caret);
        if editor.move_to_line_start(LINE_DELIMITER) {
            prop_assert!(editor.caret() < caret);
            prop_assert_eq!(editor.buffer().char_at(editor.caret()), Some(LINE_DELIMITER));
        } else {
            prop_assert_eq!(editor.caret(), caret);
        }

        let mut editor = Editor::new(&text, caret);
        if editor.move_to_line_end(LINE_DELIMITER) {
            prop_assert!(editor.caret() > caret);
            prop_assert_eq!(editor.buffer().char_at(editor.caret()), Some(LINE_DELIMITER));
        } else {
            prop_assert_eq!(editor.caret(), caret);
        }
    }
}

#[test]
fn delete_at_start_is_noop() {
    let mut editor = Editor::new("abc", 0);
    assert_eq!(editor.delete_before_caret(), Ok(()));
    assert_eq!(editor.text(), "abc");
    assert_eq!(editor.caret(), 0);
}

#[test]
fn moves_at_the_boundaries_fail() {
    let mut editor = Editor::new("abc", 0);
    assert!(!editor.move_left());
    assert_eq!(editor.caret(), 0);

    let mut editor = Editor::new("abc", 3);
    assert!(!editor.move_right());
    assert_eq!(editor.caret(), 3);
}

#[test]
fn insert_into_greeting() {
    let mut editor = Editor::default();
    editor.insert('X').unwrap();
    assert_eq!(editor.text(), "HeXllo, World!\n");
    assert_eq!(editor.caret(), 3);
}

#[test]
fn line_start_scans_left() {
    let mut editor = Editor::new("ab\ncd", 4);
    assert!(editor.move_to_line_start('\n'));
    assert_eq!(editor.caret(), 2);

    let mut editor = Editor::new("ab\ncd", 0);
    assert!(!editor.move_to_line_start('\n'));
    assert_eq!(editor.caret(), 0);
}

#[test]
fn jump_to_end_of_empty_buffer_is_noop() {
    let mut editor = Editor::new("", 0);
    editor.jump_to_buffer_end();
    assert_eq!(editor.caret(), 0);
}
