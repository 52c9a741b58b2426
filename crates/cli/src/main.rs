use std::env;
use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::debug;

use quick_suggest_core::command_table::{self, CommandTable};
use quick_suggest_core::config::{self, Config};
use quick_suggest_core::error::Result;
use quick_suggest_core::{context, execution, generation, prompt};

use crate::cli_args::Args;
use crate::selection::{PromptOutcome, SelectionAction};

mod cli_args;
mod clipboard;
mod selection;

const SELECTION_PROMPT: &str = "\n\nSelect a command (#, #c to copy, q to quit): ";

/// Load the config file and resolve it against flags and `$SHELL`.
fn resolve_config(args: &Args) -> Result<Config> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let config_file = config::load_config_file(&config_path)?;

    Ok(Config::resolve(
        config_file,
        args.endpoint.clone(),
        args.model.clone(),
        env::var("SHELL").ok(),
    ))
}

/// Build the outbound prompt, with environment context unless opted out.
fn build_generation_prompt(args: &Args, config: &Config) -> Result<String> {
    let environment_context = if args.no_context {
        None
    } else {
        Some(context::collect(&config.shell))
    };

    prompt::build_prompt(&args.task_description(), environment_context.as_deref())
}

/// Carry out the selected action and produce the process exit code.
fn dispatch(action: SelectionAction, table: &CommandTable, config: &Config) -> Result<ExitCode> {
    match action {
        SelectionAction::Quit => Ok(ExitCode::SUCCESS),
        SelectionAction::Invalid(raw) => {
            eprintln!(
                "Invalid choice `{raw}`. Available options: {}",
                table.keys().join(", ")
            );
            Ok(ExitCode::FAILURE)
        }
        SelectionAction::Copy(key) => {
            let command = &table[key.as_str()];
            if clipboard::copy_to_clipboard(command) {
                println!("Copied `{command}` to clipboard.");
            }
            // The copy path succeeds whatever the clipboard did.
            Ok(ExitCode::SUCCESS)
        }
        SelectionAction::Execute(key) => {
            let command = &table[key.as_str()];
            let code = execution::run_command(&config.shell, command)?;
            Ok(ExitCode::from(exit_status_byte(code)))
        }
    }
}

/// The child's exit code becomes our own; out-of-range codes (signal death)
/// map to plain failure.
fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let generation_prompt = build_generation_prompt(&args, &config)?;

    // Streams the menu to the terminal as it is generated.
    let response = generation::generate(&config, &generation_prompt, &mut stdout())?;
    let table = command_table::parse_command_table(&response);

    let raw = match selection::prompt_for_selection(SELECTION_PROMPT)? {
        PromptOutcome::Line(line) => line,
        // Interrupt at the prompt: quit semantics, failure status.
        PromptOutcome::Cancelled => return Ok(ExitCode::FAILURE),
    };

    dispatch(selection::interpret(&raw, &table), &table, &config)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_byte_passthrough() {
        assert_eq!(exit_status_byte(0), 0);
        assert_eq!(exit_status_byte(3), 3);
        assert_eq!(exit_status_byte(127), 127);
    }

    #[test]
    fn test_exit_status_byte_signal_death_is_failure() {
        assert_eq!(exit_status_byte(-1), 1);
        assert_eq!(exit_status_byte(300), 1);
    }
}
