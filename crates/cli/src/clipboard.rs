//! Best-effort clipboard hand-off for copied commands.

use arboard::Clipboard;
use log::warn;

/// Puts `text` on the system clipboard.
///
/// Returns whether the copy happened. A clipboard failure (headless session,
/// no display server) is logged and swallowed; it never fails the session.
pub fn copy_to_clipboard(text: &str) -> bool {
    let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()));

    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not copy to clipboard: {e}");
            false
        }
    }
}
