//! Child process launch.
//!
//! The launcher never touches its own environment. Secrets are layered onto
//! the child's inherited environment through [`std::process::Command`], so
//! the child sees the parent's variables plus every entry of the store.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::{debug, info, warn};

use crate::core::secrets::SecretStore;
use crate::error::{LaunchError, Result};

/// A fully described child process, ready to run.
#[derive(Debug)]
pub struct LaunchSpec<'a> {
    program: String,
    args: Vec<String>,
    secrets: &'a SecretStore,
}

impl<'a> LaunchSpec<'a> {
    /// Describe a child from its argv and the secrets to merge.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::NoCommand` if `argv` is empty.
    pub fn new(argv: &[String], secrets: &'a SecretStore) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or(LaunchError::NoCommand)?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            secrets,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the `Command` without running it.
    ///
    /// Stdio is inherited, and the secrets are added on top of the
    /// inherited environment.
    pub fn command(&self) -> Result<Command> {
        let resolved = resolve_program(&self.program)?;
        debug!(program = %self.program, resolved = %resolved.display(), "resolved child program");

        let mut cmd = Command::new(resolved);
        cmd.args(&self.args);
        cmd.envs(self.secrets.iter());
        Ok(cmd)
    }

    /// Run the child to completion and return the exit code to pass through.
    ///
    /// # Errors
    ///
    /// Returns a `LaunchError` if the child cannot be started or waited on.
    /// A child that exits non-zero is not an error.
    ///
    /// Ctrl-C reaches the whole foreground process group. While the child
    /// runs the launcher ignores it and keeps waiting, so the child decides
    /// how to shut down and its exit code is still passed through.
    pub fn launch(&self) -> Result<i32> {
        let mut cmd = self.command()?;

        info!(program = %self.program, args = self.args.len(), vars = self.secrets.len(), "launching child");

        ignore_interrupts();

        let mut child = cmd.spawn().map_err(|source| spawn_error(&self.program, source))?;
        drop(cmd);

        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: self.program.clone(),
            source,
        })?;

        let code = exit_code(status);
        debug!(program = %self.program, code, "child exited");
        Ok(code)
    }
}

/// Locate the program the way a shell would.
///
/// Bare names are searched on `PATH`; anything containing a path separator
/// is checked in place.
fn resolve_program(program: &str) -> Result<PathBuf> {
    if program.is_empty() {
        return Err(LaunchError::NotFound(program.to_string()).into());
    }

    match which::which(program) {
        Ok(path) => Ok(path),
        Err(_) => {
            let candidate = PathBuf::from(program);
            if candidate.components().count() > 1 && candidate.is_file() {
                Err(LaunchError::NotExecutable(program.to_string()).into())
            } else {
                Err(LaunchError::NotFound(program.to_string()).into())
            }
        }
    }
}

/// Install a no-op SIGINT handler for the rest of the process.
///
/// A handler, unlike `SIG_IGN`, resets to the default on exec, so later
/// children still see Ctrl-C normally.
fn ignore_interrupts() {
    if let Err(e) = ctrlc::set_handler(|| {}) {
        // Only one handler per process; a second launch keeps the first.
        if !matches!(e, ctrlc::Error::MultipleHandlers) {
            warn!(error = %e, "failed to install interrupt handler");
        }
    }
}

fn spawn_error(program: &str, source: std::io::Error) -> crate::error::Error {
    match source.kind() {
        ErrorKind::NotFound => LaunchError::NotFound(program.to_string()).into(),
        ErrorKind::PermissionDenied => LaunchError::NotExecutable(program.to_string()).into(),
        _ => LaunchError::Spawn {
            program: program.to_string(),
            source,
        }
        .into(),
    }
}

/// Map a child's exit status to the launcher's own exit code.
///
/// A normal exit passes its code through. On Unix a signal death becomes
/// `128 + signal`. Anything else is `1`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return crate::core::constants::SIGNAL_EXIT_BASE + signal;
        }
    }

    1
}
