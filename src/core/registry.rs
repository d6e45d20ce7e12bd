// src/core/registry.rs

use std::fmt;

use crate::models::{CommandHandler, ShellError};

/// One registered command: a name, optional help text, and its handler.
///
/// `help == None` marks the command "undocumented": still invocable, but
/// listed under the undocumented header by the built-in `help`.
#[derive(Clone)]
pub struct CommandEntry {
    pub name: String,
    pub help: Option<String>,
    pub handler: CommandHandler,
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// The contiguous slice of the command table owned by one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandRange {
    pub start: usize,
    pub len: usize,
}

impl CommandRange {
    pub fn starting_at(start: usize) -> Self {
        Self { start, len: 0 }
    }

    /// Index one past the last entry of the range.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A single flat command table shared by every live session.
///
/// Each session owns a contiguous [`CommandRange`] of this table, and every
/// lookup or listing operation is scoped to one range. That scoping is what
/// keeps nested sessions from seeing each other's commands, so it must hold
/// on every read path.
#[derive(Debug, Default)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
    per_session_limit: usize,
}

impl CommandTable {
    pub fn new(per_session_limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            per_session_limit,
        }
    }

    /// Appends one entry immediately after `range`, then grows the range.
    ///
    /// Fails with [`ShellError::TooManyCommands`] once the owning session
    /// has used up its per-session allotment; the table is left untouched
    /// and other sessions are unaffected.
    pub fn register(
        &mut self,
        range: &mut CommandRange,
        name: &str,
        help: Option<&str>,
        handler: CommandHandler,
    ) -> Result<(), ShellError> {
        if range.len >= self.per_session_limit {
            return Err(ShellError::TooManyCommands {
                limit: self.per_session_limit,
            });
        }

        // Only the active session registers, and its range is the tail of
        // the table, so the insertion point is also the table's end.
        debug_assert_eq!(range.end(), self.entries.len());
        self.entries.insert(
            range.end(),
            CommandEntry {
                name: name.to_string(),
                help: help.map(String::from),
                handler,
            },
        );
        range.len += 1;
        log::trace!("registered command '{name}' at index {}", range.end() - 1);
        Ok(())
    }

    /// Looks `name` up within `range` only; the first match wins.
    ///
    /// Names need only be unique within one session, never across sessions.
    pub fn resolve(&self, range: CommandRange, name: &str) -> Option<&CommandEntry> {
        self.slice(range).iter().find(|entry| entry.name == name)
    }

    /// Splits the names in `range` into documented and undocumented
    /// listings, both in registration order.
    pub fn partition(&self, range: CommandRange) -> (Vec<&str>, Vec<&str>) {
        let mut documented = Vec::new();
        let mut undocumented = Vec::new();
        for entry in self.slice(range) {
            if entry.help.is_some() {
                documented.push(entry.name.as_str());
            } else {
                undocumented.push(entry.name.as_str());
            }
        }
        (documented, undocumented)
    }

    /// Command names in `range` that start with `prefix`, for completion.
    pub fn matching_names(&self, range: CommandRange, prefix: &str) -> Vec<String> {
        self.slice(range)
            .iter()
            .filter(|entry| entry.name.starts_with(prefix))
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Discards `range` and everything after it once its session is popped.
    pub fn truncate_to(&mut self, range: CommandRange) {
        self.entries.truncate(range.start);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slice(&self, range: CommandRange) -> &[CommandEntry] {
        self.entries.get(range.start..range.end()).unwrap_or(&[])
    }
}

// MARK: --- UNIT TESTS ---
