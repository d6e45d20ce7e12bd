// src/system/console.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::io::{self, Write};
use std::rc::Rc;

/// Line source and sink consumed by the dispatch loop.
///
/// The engine never touches stdin/stdout directly; everything goes through
/// this trait so the loop can be driven from a terminal, a test script, or
/// anything else that can produce lines.
pub trait Console {
    /// Presents `prompt` and reads one line. `Ok(None)` means end of input,
    /// which the dispatch loop treats as an implicit `exit`.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Writes `text` without a trailing newline.
    fn write(&mut self, text: &str);

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Columns available for wrapped output, if known.
    fn width(&self) -> Option<usize> {
        None
    }
}

/// Interactive console on stdin/stdout.
///
/// Reports its width from `$COLUMNS` when the variable is set and numeric.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut buffer = String::new();
        let bytes = io::stdin().read_line(&mut buffer)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(buffer))
        }
    }

    fn write(&mut self, text: &str) {
        print!("{text}");
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn width(&self) -> Option<usize> {
        env::var("COLUMNS").ok().and_then(|v| v.parse().ok())
    }
}

/// Console fed from a fixed list of input lines, capturing all output.
///
/// The test double for the dispatch loop; also usable to drive a shell
/// non-interactively. Once the script is exhausted, `read_line` reports end
/// of input. Output (prompts included) accumulates in a shared buffer that
/// stays readable after the console has been handed to the engine.
#[derive(Debug)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    output: Rc<RefCell<String>>,
    width: Option<usize>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
            output: Rc::new(RefCell::new(String::new())),
            width: None,
        }
    }

    /// Fixes the width reported to the printer.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// A handle onto the output buffer, valid after the console is boxed
    /// into the engine.
    pub fn output_handle(&self) -> Rc<RefCell<String>> {
        Rc::clone(&self.output)
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.borrow_mut().push_str(prompt);
        Ok(self.lines.pop_front())
    }

    fn write(&mut self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }

    fn write_line(&mut self, text: &str) {
        let mut output = self.output.borrow_mut();
        output.push_str(text);
        output.push('\n');
    }

    fn width(&self) -> Option<usize> {
        self.width
    }
}

// MARK: --- UNIT TESTS ---
