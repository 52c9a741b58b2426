//! Development-context collection.
//!
//! Gathers a short description of the operator's surroundings (current
//! directory, its contents, git state) to append to the generation prompt.
//! Every probe is best effort: a probe that fails, or produces nothing, is
//! simply left out.

use std::env;
use std::process::Command;

use log::debug;

/// Cap per probe so a huge directory or git status cannot swamp the prompt.
const MAX_PROBE_LINES: usize = 30;

fn truncate_lines(text: &str, max_lines: usize) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.len() <= max_lines {
        return text.to_string();
    }

    lines.truncate(max_lines);
    lines.push("...");
    lines.join("\n")
}

fn run_probe(shell: &str, probe: &str) -> Option<String> {
    let output = match Command::new(shell).args(["-c", probe]).output() {
        Ok(output) => output,
        Err(e) => {
            debug!("Context probe `{probe}` failed to run: {e}");
            return None;
        }
    };

    if !output.status.success() {
        debug!("Context probe `{probe}` exited with {}", output.status);
        return None;
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let trimmed = text.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(truncate_lines(trimmed, MAX_PROBE_LINES))
    }
}

/// Collects the environment context string for the prompt.
///
/// Returns an empty string when nothing could be collected.
#[must_use]
pub fn collect(shell: &str) -> String {
    let mut sections: Vec<String> = Vec::new();

    if let Ok(current_dir) = env::current_dir() {
        sections.push(format!("Current directory: {}", current_dir.display()));
    }

    if let Some(listing) = run_probe(shell, "ls") {
        sections.push(format!("Directory contents:\n{listing}"));
    }

    if let Some(git_status) = run_probe(shell, "git status --short --branch") {
        sections.push(format!("Git status:\n{git_status}"));
    }

    sections.join("\n\n")
}
