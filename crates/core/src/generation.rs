//! Streaming client for the text-generation backend.
//!
//! The backend answers with newline-delimited JSON frames, each carrying an
//! optional `response` fragment. Fragments are echoed to a live sink as they
//! arrive and concatenated into the full response text. Lines that do not
//! decode are protocol noise and are skipped; the very first decodable frame
//! is a warm-up frame and is discarded whatever it contains.

use std::io::{BufRead, BufReader, Write};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// Fence marker some models wrap around code blocks; never part of a command.
const FENCE_MARKER: &str = "```";

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// One decoded frame of the streaming response.
#[derive(Deserialize, Debug)]
pub struct GenerateFrame {
    pub response: Option<String>,
}

/// Issues the generation request and returns a reader over the frame stream.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the backend answers with
/// a non-success status.
pub fn request_stream(config: &Config, prompt: &str) -> Result<impl BufRead> {
    // No client timeout: generation regularly outlasts reqwest's 30s default.
    let client = reqwest::blocking::Client::builder().timeout(None).build()?;

    debug!("Requesting generation from `{}`", config.endpoint);

    let response = client
        .post(config.endpoint.as_str())
        .json(&GenerateRequest {
            model: &config.model,
            prompt,
            stream: true,
        })
        .send()?
        .error_for_status()?;

    Ok(BufReader::new(response))
}

/// Drains the frame stream, echoing accepted fragments to `sink` as they
/// arrive, and returns their concatenation once the stream ends.
///
/// # Errors
///
/// A transport-level read failure mid-stream aborts with an error; no partial
/// result is returned.
pub fn accumulate<R: BufRead, W: Write>(frames: R, sink: &mut W) -> Result<String> {
    let mut accumulated = String::new();
    let mut warm_up_discarded = false;

    for line in frames.lines() {
        let line = line.map_err(Error::Stream)?;

        if line.is_empty() {
            continue;
        }

        let Ok(frame) = serde_json::from_str::<GenerateFrame>(&line) else {
            debug!("Skipping undecodable stream line");
            continue;
        };

        if !warm_up_discarded {
            warm_up_discarded = true;
            continue;
        }

        let Some(text) = frame.response else {
            continue;
        };

        if text == FENCE_MARKER {
            continue;
        }

        write!(sink, "{text}")?;
        sink.flush()?;
        accumulated.push_str(&text);
    }

    Ok(accumulated)
}

/// Runs one full generation: request, stream, echo, accumulate.
///
/// # Errors
///
/// Returns an error on request failure or a mid-stream transport failure.
pub fn generate<W: Write>(config: &Config, prompt: &str, sink: &mut W) -> Result<String> {
    accumulate(request_stream(config, prompt)?, sink)
}
