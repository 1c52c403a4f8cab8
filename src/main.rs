//! secret-launcher - run a command with a JSON secrets file as its environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secret_launcher::cli::{execute, output, Cli};
use secret_launcher::core::constants;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secret_launcher=debug")
        } else {
            EnvFilter::new("secret_launcher=warn")
        }
    });

    let json_logs = std::env::var(constants::LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    let code = match execute(cli.into_config()) {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = e.hint() {
                output::hint(hint);
            }
            e.exit_code()
        }
    };

    std::process::exit(code);
}
