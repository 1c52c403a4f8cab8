//! Constants used throughout secret-launcher.
//!
//! Centralizes file names and environment variable names.

/// Default secrets file, relative to the working directory.
pub const SECRETS_FILE: &str = "secrets.json";

/// Environment variable overriding the secrets file path.
pub const SECRETS_FILE_ENV: &str = "SECRET_LAUNCHER_FILE";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SECRET_LAUNCHER_LOG";

/// Environment variable selecting the log format (`json` or anything else).
pub const LOG_FORMAT_ENV: &str = "SECRET_LAUNCHER_LOG_FORMAT";

/// Offset added to a signal number to form an exit code (shell convention).
pub const SIGNAL_EXIT_BASE: i32 = 128;
