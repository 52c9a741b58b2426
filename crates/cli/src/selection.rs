//! Operator input handling.
//!
//! After the generated menu is on screen the operator gets exactly one
//! prompt. The line they enter maps to one of four disjoint actions:
//!
//! - a bare index (`2`) executes that command
//! - an index followed by `c` (`2c`) copies it to the clipboard
//! - `q` (or the legacy `n`) quits
//! - anything else is invalid, and the valid keys are listed back
//!
//! The prompt reads raw-mode key events so an interrupt is seen as a key and
//! reported as a cancellation outcome instead of killing the process mid-read.

use std::io::{stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use quick_suggest_core::command_table::CommandTable;
use quick_suggest_core::error::Result;

/// Token that quits the session
pub const QUIT_OPTION: &str = "q";
/// Older quit token, still accepted
pub const LEGACY_QUIT_OPTION: &str = "n";
/// Character marking a copy request, as in `2c`
pub const COPY_MARKER: char = 'c';

/// The interpreted intent of one line of operator input.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Execute(String),
    Copy(String),
    Quit,
    Invalid(String),
}

/// Outcome of the selection prompt itself.
#[derive(Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Line(String),
    Cancelled,
}

/// Maps one line of operator input to a [`SelectionAction`].
///
/// The copy rule is deliberately loose: a `c` anywhere requests a copy, and
/// the key is taken from the leading character. `2c` and `2xc` both copy
/// option 2; `c2` is invalid because `c` is not a key. A copy or execute
/// request whose key is absent from the table is invalid, never a no-op.
#[must_use]
pub fn interpret(raw: &str, table: &CommandTable) -> SelectionAction {
    if raw == QUIT_OPTION || raw == LEGACY_QUIT_OPTION {
        return SelectionAction::Quit;
    }

    if raw.contains(COPY_MARKER) {
        let key = raw.chars().next().map(String::from).unwrap_or_default();
        if table.contains_key(key.as_str()) {
            return SelectionAction::Copy(key);
        }

        return SelectionAction::Invalid(raw.to_string());
    }

    if table.contains_key(raw) {
        return SelectionAction::Execute(raw.to_string());
    }

    SelectionAction::Invalid(raw.to_string())
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// Prompts once and reads a single line of input in raw mode.
///
/// Printable keys echo and accumulate, Backspace edits, Enter submits the
/// trimmed line. Ctrl-C, Escape, and Ctrl-D on an empty line cancel.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched to raw mode or an
/// event cannot be read.
pub fn prompt_for_selection(prompt: &str) -> Result<PromptOutcome> {
    let mut stdout = stdout();

    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let mut input = String::new();

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(PromptOutcome::Cancelled);
                }
                KeyCode::Char('d')
                    if key_event.modifiers.contains(KeyModifiers::CONTROL)
                        && input.is_empty() =>
                {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(PromptOutcome::Cancelled);
                }
                KeyCode::Esc => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(PromptOutcome::Cancelled);
                }
                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(PromptOutcome::Line(input.trim().to_string()));
                }
                KeyCode::Backspace => {
                    if input.pop().is_some() {
                        write!(stdout, "\u{8} \u{8}")?;
                        stdout.flush()?;
                    }
                }
                KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.push(c);
                    write!(stdout, "{c}")?;
                    stdout.flush()?;
                }
                _ => {}
            }
        }
    }
}
