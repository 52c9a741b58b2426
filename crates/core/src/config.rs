//! Configuration resolution for quick-suggest.
//!
//! Settings come from three places, in descending precedence: command-line
//! flags, the YAML config file, and built-in defaults. The shell is special:
//! `$SHELL` wins over the config file. A missing config file is not an error.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the config file
const DEFAULT_CONFIG_PATH: &str = "~/.quick-suggest/config.yml";

/// Default generation endpoint (Ollama's generate API on the local host)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
/// Default model to request suggestions from
pub const DEFAULT_MODEL: &str = "deepseek-coder-v2";
/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Raw, partial settings as they appear in the config file.
#[derive(Deserialize, Debug, Default)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub shell: Option<String>,
}

/// Fully resolved settings for one session.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub model: String,
    pub shell: String,
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Reads the config file at `path`.
///
/// Returns an empty [`ConfigFile`] if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if it contains
/// invalid YAML.
pub fn load_config_file(path: &str) -> Result<ConfigFile> {
    if !Path::exists(Path::new(path)) {
        return Ok(ConfigFile::default());
    }

    let reader = File::open(path)
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            path.to_string(),
            e,
        )
    })
}

impl Config {
    /// Combines flag values, file values and defaults into resolved settings.
    ///
    /// `shell_env` is the value of `$SHELL` as seen by the caller; it takes
    /// precedence over the config file's `shell` entry.
    #[must_use]
    pub fn resolve(
        file: ConfigFile,
        endpoint_arg: Option<String>,
        model_arg: Option<String>,
        shell_env: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint_arg
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: model_arg
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            shell: shell_env
                .or(file.shell)
                .unwrap_or_else(|| DEFAULT_SHELL.to_string()),
        }
    }
}
