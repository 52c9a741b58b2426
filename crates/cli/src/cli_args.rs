//! Command-line argument parsing and validation.

use clap::Parser;

/// Command-line arguments for the quick-suggest CLI tool.
///
/// Everything after the flags is taken as the natural-language task
/// description, so `qs find big files` works without quoting.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the config file YAML.
    ///
    /// If not provided, defaults to `~/.quick-suggest/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Generation endpoint URL.
    ///
    /// Overrides the config file's `endpoint` entry.
    #[arg(long, short = 'e')]
    pub endpoint: Option<String>,

    /// Model to request suggestions from.
    ///
    /// Overrides the config file's `model` entry.
    #[arg(long, short = 'm')]
    pub model: Option<String>,

    /// Skip collecting directory/git context for the prompt.
    #[arg(long, action)]
    pub no_context: bool,

    /// What the command should do, in plain language.
    #[arg(required = true, num_args(1..))]
    pub task: Vec<String>,
}

impl Args {
    /// Joins the task words back into the single description string.
    #[must_use]
    pub fn task_description(&self) -> String {
        self.task.join(" ")
    }
}
