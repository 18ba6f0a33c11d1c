//! Prints a tour of the French deck.

use std::io;
use std::process::ExitCode;

use frenchdeck::{DemoOptions, demo};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let options = DemoOptions::default();
    let stdout = io::stdout();
    match demo::run(&options, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "walkthrough failed");
            ExitCode::FAILURE
        }
    }
}
