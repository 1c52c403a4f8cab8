//! Command-line interface.

pub mod check;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{LauncherConfig, Mode};
use crate::core::constants;

/// Load a JSON secrets file into a command's environment and run it.
#[derive(Parser, Debug)]
#[command(
    name = "secret-launcher",
    about = "Load a JSON secrets file into a command's environment and run it",
    version,
    after_help = "Exit codes: 0 success, 1 secrets file error, 2 launch error, otherwise the command's own code."
)]
pub struct Cli {
    /// Path to the JSON secrets file
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        env = constants::SECRETS_FILE_ENV,
        default_value = constants::SECRETS_FILE
    )]
    pub secrets_file: PathBuf,

    /// Key that must be present in the secrets file (repeatable)
    #[arg(short, long = "require", value_name = "KEY")]
    pub required: Vec<String>,

    /// Validate the secrets file and list its keys without running anything
    #[arg(long, conflicts_with = "command")]
    pub check: bool,

    /// Print the --check report as JSON
    #[arg(long, requires = "check", conflicts_with = "command")]
    pub json: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command and arguments to run
    #[arg(
        trailing_var_arg = true,
        required_unless_present = "check",
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Collapse parsed flags into a launcher configuration.
    pub fn into_config(self) -> LauncherConfig {
        let config = LauncherConfig::new(self.command)
            .with_secrets_file(self.secrets_file)
            .with_required(self.required)
            .quiet(self.quiet);

        if self.check {
            config.check(self.json)
        } else {
            config
        }
    }
}

/// Execute the configured action and return the process exit code.
pub fn execute(config: LauncherConfig) -> crate::error::Result<i32> {
    config.trace();

    match config.mode {
        Mode::Run(_) => run::execute(&config),
        Mode::Check { json } => check::execute(&config, json).map(|()| 0),
    }
}
