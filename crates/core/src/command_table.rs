//! Parsing of the numbered command menu out of the response text.

use indexmap::IndexMap;

/// Parsed menu: textual index key to literal shell command line.
///
/// Insertion-ordered so the keys can be listed back to the operator in the
/// order the backend produced them.
pub type CommandTable = IndexMap<String, String>;

/// Extracts numbered entries of the form `<digits>) <command>` from `text`.
///
/// Lines are trimmed before matching. Anything that is not a numbered entry
/// (blank lines, `↳` disambiguation lines, prose) is ignored. A repeated
/// index overwrites the earlier entry.
#[must_use]
pub fn parse_command_table(text: &str) -> CommandTable {
    let mut table = CommandTable::new();

    for line in text.lines() {
        let trimmed = line.trim();

        let digit_count = trimmed.chars().take_while(char::is_ascii_digit).count();
        if digit_count == 0 {
            continue;
        }

        let (key, rest) = trimmed.split_at(digit_count);
        let Some(command) = rest.strip_prefix(") ") else {
            continue;
        };

        if command.is_empty() {
            continue;
        }

        table.insert(key.to_string(), command.to_string());
    }

    table
}
