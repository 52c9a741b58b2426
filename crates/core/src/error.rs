use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to generation endpoint failed: {}", _0)]
    Request(#[from] reqwest::Error),

    #[error("Generation stream was interrupted: {}", _0)]
    Stream(std::io::Error),

    #[error("Failed to launch `{}` under `{}`: {}", .command, .shell, .original)]
    Launch {
        shell: String,
        command: String,
        original: std::io::Error,
    },

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing prompt template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering prompt template: {}", .0)]
    Render(#[from] RenderError),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }
}
