//! Check command.
//!
//! Validates the secrets file without launching anything and lists the keys
//! it would export. Values are never printed.

use serde::Serialize;

use crate::cli::output;
use crate::cli::run;
use crate::core::config::LauncherConfig;
use crate::core::secrets::SecretStore;
use crate::error::Result;

/// Machine-readable result of a check.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub count: usize,
    pub keys: Vec<String>,
}

impl CheckReport {
    pub fn new(config: &LauncherConfig, secrets: &SecretStore) -> Self {
        Self {
            path: config.secrets_file.display().to_string(),
            count: secrets.len(),
            keys: secrets.keys().map(str::to_string).collect(),
        }
    }
}

/// Validate the secrets file and print its keys.
pub fn execute(config: &LauncherConfig, json: bool) -> Result<()> {
    let quiet = LauncherConfig {
        quiet: config.quiet || json,
        ..config.clone()
    };
    let secrets = run::load(&quiet)?;
    let report = CheckReport::new(config, &secrets);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?
        );
    } else if report.keys.is_empty() {
        output::header("no secrets defined");
    } else {
        output::header(&format!("{} secrets", report.count));
        for key in &report.keys {
            output::list_item(key);
        }
    }

    Ok(())
}
