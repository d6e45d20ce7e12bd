//! An engine for interactive, line-oriented command shells: register
//! commands, run the read-tokenize-dispatch loop, and nest sub-shells with
//! their own command sets. See `Shell` for the entry point.

pub mod constants;
pub mod core;
pub mod models;
pub mod system;

pub use crate::core::arg_parser::{ArgList, parse_arguments};
pub use crate::core::dispatcher::Shell;
pub use crate::models::{CommandHandler, CommandResult, SessionOptions, ShellError, ShellSettings};
pub use crate::system::console::{Console, ScriptedConsole, StdConsole};
