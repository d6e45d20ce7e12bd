// src/constants.rs

/// Prompt used by sessions that do not set one.
pub const DEFAULT_PROMPT: &str = "(shellkit) ";

/// Header printed above commands registered with help text.
pub const DEFAULT_DOC_HEADER: &str = "Documented commands:";

/// Header printed above commands registered without help text.
pub const DEFAULT_UNDOC_HEADER: &str = "Undocumented commands:";

/// Character used to underline the listing headers.
pub const DEFAULT_RULER: char = '=';

/// Commands one session may register, built-ins included.
pub const MAX_COMMANDS_PER_SESSION: usize = 24;

/// How deep sessions may nest.
pub const MAX_SESSION_DEPTH: usize = 8;

/// Output width used when the console cannot report one.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Conventional name of the settings file (see `system::settings`).
pub const SETTINGS_FILENAME: &str = "shellkit.toml";

/// Process exit code used when the session nesting ceiling is hit.
pub const OUT_OF_STACK_EXIT_CODE: i32 = 2;
