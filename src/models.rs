// src/models.rs

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;
use crate::core::arg_parser::ArgList;
use crate::core::dispatcher::Shell;

/// Status codes shared by the engine and by command handlers.
///
/// The `Display` text doubles as the message the dispatch loop writes to the
/// console when a command fails, so the wording is user-facing.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Cannot register more than {limit} commands in one session.")]
    TooManyCommands { limit: usize },

    #[error("Too many arguments for the '{command}' command.")]
    TooManyArgs { command: String },

    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("Argument error: {0}")]
    ArgumentError(String),

    #[error("Out of memory while parsing arguments.")]
    OutOfMemory,

    #[error("Session nesting limit of {limit} exceeded.")]
    OutOfStackSpace { limit: usize },

    #[error("No active shell session.")]
    NoActiveSession,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of one command handler invocation or engine operation.
pub type CommandResult = Result<(), ShellError>;

/// A registered command callback.
///
/// Handlers receive the engine itself, so they can write output, mutate the
/// active session, or enter a nested one. The argument list is borrowed: it
/// lives for exactly one dispatch iteration and cannot be retained.
/// `Rc` matches the single-threaded discipline of the engine; the table
/// clones the handler out before invoking it.
pub type CommandHandler = Rc<dyn Fn(&mut Shell, Option<&ArgList>) -> CommandResult>;

/// Callback invoked when the user submits an empty (or whitespace-only) line.
pub type EmptyLineHandler = Rc<dyn Fn(&mut Shell) -> CommandResult>;

/// Session-level override replacing the default resolve-and-invoke step.
pub type DispatchHandler = Rc<dyn Fn(&mut Shell, &str, Option<&ArgList>) -> CommandResult>;

/// Per-session presentation and behavior.
///
/// `None` fields fall back to the engine's [`ShellSettings`] when the
/// session starts.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Prompt printed before each input line.
    pub prompt: Option<String>,
    /// Text printed once when the session starts.
    pub banner: Option<String>,
    /// Header for the documented part of the `help` listing.
    pub doc_header: Option<String>,
    /// Header for the undocumented part of the `help` listing.
    pub undoc_header: Option<String>,
    /// Character used to underline the listing headers.
    pub ruler: Option<char>,
    /// Whether the built-in `exit` command is registered.
    pub use_default_exit: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: None,
            banner: None,
            doc_header: None,
            undoc_header: None,
            ruler: None,
            use_default_exit: true,
        }
    }
}

/// Engine-wide settings: capacities and fallback presentation values.
///
/// Deserializable from `shellkit.toml` (every field is optional there, see
/// `system::settings`); [`Default`] mirrors the compiled-in constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub max_commands_per_session: usize,
    pub max_session_depth: usize,
    pub wrap_width: usize,
    pub prompt: String,
    pub doc_header: String,
    pub undoc_header: String,
    pub ruler: char,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            max_commands_per_session: constants::MAX_COMMANDS_PER_SESSION,
            max_session_depth: constants::MAX_SESSION_DEPTH,
            wrap_width: constants::DEFAULT_WRAP_WIDTH,
            prompt: constants::DEFAULT_PROMPT.to_string(),
            doc_header: constants::DEFAULT_DOC_HEADER.to_string(),
            undoc_header: constants::DEFAULT_UNDOC_HEADER.to_string(),
            ruler: constants::DEFAULT_RULER,
        }
    }
}
