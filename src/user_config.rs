// visionary Configuration
// Edit this file to customize your editor, then rebuild.

use crate::config::Config;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Keybindings
    // Editing
    config.bind("Enter", "insert-newline");
    config.bind("Tab", "insert-tab");
    config.bind("Backspace", "delete-previous-character");

    // Movement
    config.bind("Left", "backward-character");
    config.bind("Right", "forward-character");
    config.bind("Up", "previous-line"); // caret lands on the previous newline
    config.bind("Down", "next-line"); // caret lands on the next newline
    config.bind("Home", "beginning-of-file");
    config.bind("End", "end-of-file");

    // Buffer
    config.set("initial_text", "Hello, World!\n");
    config.set("initial_caret", 2_i64);
    config.set("tab_width", 4_i64); // Spaces a tab advances by

    // GUI
    config.set("font_path", "Fonts/anon.ttf"); // Missing font is fatal in GUI mode
    config.set("font_size", 30_i64); // Text size in pixels
    config.set("window_width", 1920_i64);
    config.set("window_height", 1080_i64);
    config.set("window_title", "Visionary");

    // Frame rate cap for both GUI and terminal (0 = uncapped)
    config.set("frame_rate", 144_i64);
}
