// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildcmdError {
    /// The child ran to completion but exited non-zero.
    ///
    /// `output` is the same cleaned text `run_cmd` would have returned on
    /// success, so callers can log or attach it without re-running anything.
    #[error("Command {command:?} returned non-zero exit status {code}")]
    CommandFailed {
        code: i32,
        command: Vec<String>,
        output: String,
    },

    #[error("Command vector is empty")]
    EmptyCommand,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid build reason: {0}")]
    ReasonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuildcmdError {
    /// Exit code of the failed child, if this error came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            BuildcmdError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<nix::Error> for BuildcmdError {
    fn from(err: nix::Error) -> Self {
        BuildcmdError::IoError(std::io::Error::from(err))
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BuildcmdError>;
