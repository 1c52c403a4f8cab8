//! Resolved runtime configuration.
//!
//! Command-line flags (with their environment fallbacks) are collapsed into a
//! [`LauncherConfig`] before any work starts, so the rest of the crate never
//! looks at `clap` types or process state.

use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;

/// What the launcher should do once the secrets file is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Launch the given argv with the secrets merged into its environment.
    Run(Vec<String>),
    /// Validate the file and report its keys without launching anything.
    Check { json: bool },
}

/// Everything needed to load secrets and act on them.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Path to the secrets file
    pub secrets_file: PathBuf,
    /// Keys that must be present in the secrets file
    pub required: Vec<String>,
    /// Suppress progress messages
    pub quiet: bool,
    /// Run or check
    pub mode: Mode,
}

impl LauncherConfig {
    /// Config for launching `command` with the default secrets file.
    pub fn new(command: Vec<String>) -> Self {
        Self {
            secrets_file: PathBuf::from(constants::SECRETS_FILE),
            required: Vec::new(),
            quiet: false,
            mode: Mode::Run(command),
        }
    }

    pub fn with_secrets_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.secrets_file = path.into();
        self
    }

    pub fn with_required(mut self, keys: Vec<String>) -> Self {
        self.required = keys;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn check(mut self, json: bool) -> Self {
        self.mode = Mode::Check { json };
        self
    }

    /// Log the resolved configuration (never secret values).
    pub fn trace(&self) {
        debug!(
            secrets_file = %self.secrets_file.display(),
            required = self.required.len(),
            quiet = self.quiet,
            mode = ?self.mode,
            "resolved configuration"
        );
    }
}
