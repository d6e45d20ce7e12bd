// src/core/arg_parser.rs

use crate::models::ShellError;

/// Classification states shared by both tokenizer passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    None,
    InWord,
    InQuotes,
}

/// An ordered, immutable list of arguments parsed from one input line.
///
/// Built once per line by [`parse_arguments`], lent to the command handler
/// for the duration of one invocation, and dropped when the dispatch
/// iteration ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgList {
    args: Vec<String>,
}

impl ArgList {
    /// Number of arguments on the line.
    pub fn count(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The argument at `index`, in input order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }
}

/// Splits an argument line into tokens.
///
/// Returns `Ok(None)` only when `argline` itself is absent ("no argument
/// text was supplied"); an empty or whitespace-only line yields an
/// `ArgList` with count 0.
///
/// Quoting follows a three-state machine: `"` opens a quoted token only
/// from outside a word, whitespace inside quotes is verbatim content, and a
/// quote left unterminated extends to the end of the line. Two consequences
/// worth spelling out: a `"` inside an already-open word is an ordinary
/// character (`a"b"c` is one token), and a closing `"` always ends its
/// token, so a word glued onto a quoted segment starts a new token
/// (`"a"b` is two tokens). Both behaviors are pinned by tests.
///
/// The line is walked twice with the same machine: the first pass counts
/// tokens so the output vector can be sized exactly, the second pass
/// materializes them. Allocation failure surfaces as
/// [`ShellError::OutOfMemory`]; partially built tokens are freed on the way
/// out.
pub fn parse_arguments(argline: Option<&str>) -> Result<Option<ArgList>, ShellError> {
    let Some(line) = argline else {
        return Ok(None);
    };

    let count = count_tokens(line);
    let mut args: Vec<String> = Vec::new();
    args.try_reserve_exact(count)
        .map_err(|_| ShellError::OutOfMemory)?;

    let mut state = LexState::None;
    let mut start = 0usize;
    for (pos, ch) in line.char_indices() {
        match state {
            LexState::None => {
                if ch == '"' {
                    state = LexState::InQuotes;
                    start = pos + ch.len_utf8();
                } else if !ch.is_whitespace() {
                    state = LexState::InWord;
                    start = pos;
                }
            }
            LexState::InQuotes => {
                if ch == '"' {
                    args.push(copy_token(&line[start..pos])?);
                    state = LexState::None;
                }
            }
            LexState::InWord => {
                if ch.is_whitespace() {
                    args.push(copy_token(&line[start..pos])?);
                    state = LexState::None;
                }
            }
        }
    }

    // Implicitly close the final token; an unterminated quote runs to the
    // end of the line.
    if state != LexState::None {
        args.push(copy_token(&line[start..])?);
    }

    debug_assert_eq!(args.len(), count);
    Ok(Some(ArgList { args }))
}

/// First pass: walks the state machine and counts tokens without allocating.
fn count_tokens(line: &str) -> usize {
    let mut state = LexState::None;
    let mut count = 0usize;

    for ch in line.chars() {
        state = match state {
            LexState::None if ch == '"' => LexState::InQuotes,
            LexState::None if ch.is_whitespace() => LexState::None,
            LexState::None => LexState::InWord,
            LexState::InQuotes if ch == '"' => {
                count += 1;
                LexState::None
            }
            LexState::InQuotes => LexState::InQuotes,
            LexState::InWord if ch.is_whitespace() => {
                count += 1;
                LexState::None
            }
            LexState::InWord => LexState::InWord,
        };
    }

    if state != LexState::None {
        count += 1;
    }
    count
}

fn copy_token(piece: &str) -> Result<String, ShellError> {
    let mut token = String::new();
    token
        .try_reserve_exact(piece.len())
        .map_err(|_| ShellError::OutOfMemory)?;
    token.push_str(piece);
    Ok(token)
}

// MARK: --- UNIT TESTS ---
