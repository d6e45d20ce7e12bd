// src/system/printer.rs

//! Help-text rendering: ruled titles, word-wrapped paragraphs, and
//! column-flowed command listings.
//!
//! Formatting is a boundary concern; nothing here affects parsing or
//! dispatch. All output goes through the [`Console`] sink so it can be
//! captured in tests.

use crate::system::console::Console;

/// Prints `title` underlined with a run of `ruler` characters.
pub fn print_title(console: &mut dyn Console, title: &str, ruler: char) {
    console.write_line("");
    console.write_line(title);
    let underline = ruler.to_string().repeat(title.chars().count() + 1);
    console.write_line(&underline);
}

/// Word-wraps `text`, assuming the cursor already sits at column `offset`.
///
/// Continuation lines are indented back to `offset`, which lines wrapped
/// help text up under its command name (`name   help...`).
pub fn print_wrapped(console: &mut dyn Console, width: usize, offset: usize, text: &str) {
    let mut column = offset;
    let mut at_line_start = true;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !at_line_start && column + word_len + 1 > width {
            console.write_line("");
            console.write(&" ".repeat(offset));
            column = offset;
            at_line_start = true;
        }

        if at_line_start {
            console.write(word);
            column += word_len;
            at_line_start = false;
        } else {
            console.write(" ");
            console.write(word);
            column += word_len + 1;
        }
    }
    console.write_line("");
}

/// Flows command names across the width, one space apart.
pub fn print_columns(console: &mut dyn Console, width: usize, names: &[&str]) {
    let mut column = 0usize;
    for name in names {
        let name_len = name.chars().count() + 1;
        if column > 0 && column + name_len >= width {
            console.write_line("");
            column = 0;
        }
        console.write(name);
        console.write(" ");
        column += name_len;
    }
    console.write_line("");
}

// MARK: --- UNIT TESTS ---
