// src/core/context.rs

use std::fmt;

use crate::core::registry::CommandRange;
use crate::models::{DispatchHandler, EmptyLineHandler, SessionOptions, ShellError, ShellSettings};

/// The mutable configuration of one running shell session.
///
/// A context is mutated only while it sits on top of the [`ContextStack`]
/// (single-writer discipline) and is dropped when its dispatch loop ends.
pub struct SessionContext {
    pub prompt: String,
    pub banner: Option<String>,
    pub doc_header: String,
    pub undoc_header: String,
    pub ruler: char,
    /// The slice of the command table this session owns.
    pub range: CommandRange,
    /// Checked by the dispatch loop once per iteration.
    pub exit_requested: bool,
    pub use_default_exit: bool,
    pub on_empty_line: Option<EmptyLineHandler>,
    pub on_dispatch: Option<DispatchHandler>,
}

impl SessionContext {
    /// Builds a context from per-session options, falling back to the
    /// engine settings, with its command range starting at `start`.
    pub fn from_options(options: SessionOptions, start: usize, defaults: &ShellSettings) -> Self {
        Self {
            prompt: options.prompt.unwrap_or_else(|| defaults.prompt.clone()),
            banner: options.banner,
            doc_header: options
                .doc_header
                .unwrap_or_else(|| defaults.doc_header.clone()),
            undoc_header: options
                .undoc_header
                .unwrap_or_else(|| defaults.undoc_header.clone()),
            ruler: options.ruler.unwrap_or(defaults.ruler),
            range: CommandRange::starting_at(start),
            exit_requested: false,
            use_default_exit: options.use_default_exit,
            on_empty_line: None,
            on_dispatch: None,
        }
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("prompt", &self.prompt)
            .field("range", &self.range)
            .field("exit_requested", &self.exit_requested)
            .finish_non_exhaustive()
    }
}

/// Bounded stack of session contexts; the top is the active session.
///
/// Invariants: the stack never exceeds its capacity, and the ranges of the
/// stacked contexts are disjoint and contiguous in push order (each child
/// range starts exactly where its parent's range ended at push time).
#[derive(Debug)]
pub struct ContextStack {
    contexts: Vec<SessionContext>,
    capacity: usize,
}

impl ContextStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            contexts: Vec::new(),
            capacity,
        }
    }

    /// Where the next session's command range must begin: right at the end
    /// of the active session's range, or 0 for the first session.
    pub fn next_range_start(&self) -> usize {
        self.contexts.last().map_or(0, |ctx| ctx.range.end())
    }

    /// Pushes a context, refusing once the nesting ceiling is reached.
    ///
    /// The refusal is an ordinary `Err` here; the engine escalates it to a
    /// process exit (see `Shell::start_session`).
    pub fn push(&mut self, context: SessionContext) -> Result<(), ShellError> {
        if self.contexts.len() >= self.capacity {
            return Err(ShellError::OutOfStackSpace {
                limit: self.capacity,
            });
        }
        self.contexts.push(context);
        Ok(())
    }

    /// Removes the active context and makes its parent active again.
    pub fn pop(&mut self) -> Option<SessionContext> {
        self.contexts.pop()
    }

    pub fn active(&self) -> Option<&SessionContext> {
        self.contexts.last()
    }

    pub fn active_mut(&mut self) -> Option<&mut SessionContext> {
        self.contexts.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

// MARK: --- UNIT TESTS ---
