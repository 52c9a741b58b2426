//! Child-process execution with live output forwarding.
//!
//! The chosen command line runs under the operator's shell with stdout and
//! stderr piped separately. One reader thread drains each pipe and hands
//! whole lines to a channel, so a child that floods one stream while staying
//! silent on the other can never stall the parent. The receive loop ends only
//! once both pipes hit end-of-stream; the child is reaped after that, never
//! before, so output written just before exit is not lost.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;

use log::{debug, info};

use crate::error::{Error, Result};

enum OutputLine {
    Out(String),
    Err(String),
}

fn forward_lines<R: Read>(
    pipe: Option<R>,
    sender: Sender<OutputLine>,
    wrap: fn(String) -> OutputLine,
) {
    let Some(pipe) = pipe else {
        return;
    };

    for line in BufReader::new(pipe).lines() {
        let Ok(line) = line else {
            return;
        };

        if sender.send(wrap(line)).is_err() {
            return;
        }
    }
}

/// Runs `command_line` under `shell -c`, forwarding the child's output to
/// this process's own stdout and stderr in real time.
///
/// # Errors
///
/// Returns an error if the shell cannot be launched or forwarding fails.
pub fn run_command(shell: &str, command_line: &str) -> Result<i32> {
    run_command_with_sinks(shell, command_line, &mut io::stdout(), &mut io::stderr())
}

/// As [`run_command`], but with caller-supplied sinks for the two streams.
///
/// Each forwarded line is written and flushed as a unit, so lines are never
/// split across writes; the relative order of stdout lines against stderr
/// lines follows OS readiness only.
///
/// # Errors
///
/// Returns an error if the shell cannot be launched, a sink write fails, or
/// the child cannot be awaited.
pub fn run_command_with_sinks<O: Write, E: Write>(
    shell: &str,
    command_line: &str,
    stdout_sink: &mut O,
    stderr_sink: &mut E,
) -> Result<i32> {
    info!("Executing `{command_line}` with `{shell}`");

    let mut child = Command::new(shell)
        .args(["-c", command_line])
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Launch {
            shell: shell.to_string(),
            command: command_line.to_string(),
            original: e,
        })?;

    let (sender, receiver) = mpsc::channel();
    let stderr_sender = sender.clone();

    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let stdout_reader = thread::spawn(move || forward_lines(stdout_pipe, sender, OutputLine::Out));
    let stderr_reader =
        thread::spawn(move || forward_lines(stderr_pipe, stderr_sender, OutputLine::Err));

    // The iterator ends when both reader threads have dropped their senders,
    // which happens only at end-of-stream on their pipes.
    for line in receiver {
        match line {
            OutputLine::Out(line) => {
                writeln!(stdout_sink, "{line}")?;
                stdout_sink.flush()?;
            }
            OutputLine::Err(line) => {
                writeln!(stderr_sink, "{line}")?;
                stderr_sink.flush()?;
            }
        }
    }

    let _ = stdout_reader.join();
    let _ = stderr_reader.join();

    let status = child.wait().map_err(Error::SubProcess)?;
    debug!("Child exited with {status}");

    // `code()` is None when the child died to a signal.
    Ok(status.code().unwrap_or(-1))
}
