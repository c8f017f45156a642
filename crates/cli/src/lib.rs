//! Library half of the `tessera` command-line tool.

pub mod commands;
pub mod config;

pub use config::{Cli, Command};

/// Initializes the tracing subscriber.
///
/// Log lines go to stderr so JSON printed on stdout stays clean.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tessera={level},tessera_cli={level},tessera_fhir={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
