//! Quick Suggest CLI Library
//!
//! This crate provides the command-line interface for quick-suggest. It
//! handles argument parsing, the one-shot selection prompt, clipboard
//! hand-off and the session orchestration that glues the core pipeline
//! together.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`selection`]: Operator input — the raw-mode prompt and the mapping of
//!   one input line to a selection action
//! - [`clipboard`]: Best-effort clipboard hand-off for copied commands
//!
//! # Examples
//!
//! The CLI binary (`qs`) is driven by a plain natural-language task:
//!
//! ```bash
//! # Ask for command suggestions, pick one from the numbered menu
//! qs find string in files
//!
//! # Pick a different model or endpoint for this run
//! qs -m codellama -e http://10.0.0.1:11434/api/generate tar this directory
//!
//! # Leave out the directory/git context probes
//! qs --no-context resize all pngs to 50%
//! ```
//!
//! At the prompt, a bare index executes that command, an index followed by
//! `c` (e.g. `2c`) copies it to the clipboard, and `q` quits.

pub mod cli_args;
pub mod clipboard;
pub mod selection;
