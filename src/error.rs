//! Error types for secret-launcher.
//!
//! Errors fall into two families: problems with the secrets file
//! ([`ConfigError`]) and problems starting the child ([`LaunchError`]).
//! A child that runs and exits non-zero is not an error.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for configuration errors.
pub const EXIT_CONFIG: i32 = 1;

/// Exit code for launch errors.
pub const EXIT_LAUNCH: i32 = 2;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Output(_) => EXIT_CONFIG,
            Error::Launch(_) => EXIT_LAUNCH,
        }
    }

    /// Short remediation hint, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError::Missing(_)) => {
                Some("pass --secrets-file <path> or set SECRET_LAUNCHER_FILE")
            }
            Error::Config(ConfigError::UnsupportedValue { .. }) => {
                Some("only string, number and boolean values can become environment variables")
            }
            Error::Launch(LaunchError::NotFound(_)) => {
                Some("check the command name and your PATH")
            }
            _ => None,
        }
    }
}

/// Secrets file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing secrets file: {}", .0.display())]
    Missing(PathBuf),

    #[error("cannot read secrets file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON in {}: expected a JSON object at the top level, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("unsupported value for key {key}: {kind} cannot be used as an environment variable")]
    UnsupportedValue { key: String, kind: &'static str },

    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("invalid value for key {key}: {reason}")]
    InvalidValue { key: String, reason: &'static str },

    #[error("missing required secret(s): {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// Child process errors.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("no command specified")]
    NoCommand,

    #[error("child process not found: {0}")]
    NotFound(String),

    #[error("child process not executable: {0}")]
    NotExecutable(String),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for secret-launcher operations.
pub type Result<T> = std::result::Result<T, Error>;
