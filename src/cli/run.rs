//! Run command.
//!
//! Loads the secrets file and executes a command with its entries injected as
//! environment variables.

use tracing::info;

use crate::cli::output;
use crate::core::config::{LauncherConfig, Mode};
use crate::core::launch::LaunchSpec;
use crate::core::secrets::SecretStore;
use crate::error::{LaunchError, Result};

/// Load secrets and run the configured command.
///
/// Returns the exit code the launcher should finish with.
pub fn execute(config: &LauncherConfig) -> Result<i32> {
    let command = match &config.mode {
        Mode::Run(command) => command,
        Mode::Check { .. } => return Err(LaunchError::NoCommand.into()),
    };

    let secrets = load(config)?;
    run_with_secrets(&secrets, command, config.quiet)
}

/// Load the secrets file and check required keys.
pub(crate) fn load(config: &LauncherConfig) -> Result<SecretStore> {
    let secrets = SecretStore::load(&config.secrets_file)?;
    secrets.require(&config.required)?;

    info!(count = secrets.len(), "secrets loaded");
    if !config.quiet {
        output::success(&format!(
            "loaded {} secret{} from {}",
            secrets.len(),
            if secrets.len() == 1 { "" } else { "s" },
            output::path(config.secrets_file.display())
        ));
    }

    Ok(secrets)
}

/// Run a command with the given secrets as environment variables.
fn run_with_secrets(secrets: &SecretStore, command: &[String], quiet: bool) -> Result<i32> {
    let spec = LaunchSpec::new(command, secrets)?;

    if !quiet {
        output::success("environment ready");
        output::step(&format!("launching {}", spec.program()));
    }

    spec.launch()
}
