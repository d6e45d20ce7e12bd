//! # Boundary Layer
//!
//! Collaborators the dispatch core consumes but does not depend on for
//! correctness: line input and output, help-text rendering, and the
//! on-disk settings file. Swapping any of these leaves parsing and
//! dispatch untouched.
//!
//! ## Modules
//!
//! - **`console`**: the `Console` trait (line source and sink) with the
//!   interactive `StdConsole` and a scripted test double.
//! - **`printer`**: ruled titles, word wrapping, and command listings.
//! - **`settings`**: loading and creating the `shellkit.toml` settings
//!   file.

pub mod console;
pub mod printer;
pub mod settings;
