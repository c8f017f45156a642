//! Command-line configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TESSERA_LOG_LEVEL` | info | Log level |
//! | `TESSERA_PRETTY` | false | Pretty-print JSON output |
//!
//! `RUST_LOG`, when set, takes precedence over `TESSERA_LOG_LEVEL`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check and round-trip FHIR JSON resources.
#[derive(Debug, Clone, Parser)]
#[command(name = "tessera")]
#[command(about = "Check and round-trip FHIR JSON resources")]
#[command(version)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "TESSERA_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Pretty-print JSON output.
    #[arg(long, env = "TESSERA_PRETTY", default_value = "false", global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode each file as a resource and report the ones that fail.
    Check {
        /// FHIR JSON files.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Decode a file and print it re-encoded.
    Roundtrip {
        /// FHIR JSON file.
        file: PathBuf,

        /// Compare the re-encoded document with the input and fail on any
        /// difference.
        #[arg(long)]
        verify: bool,
    },

    /// List the resource types this build understands.
    Types,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_takes_many_files() {
        let cli = Cli::try_parse_from(["tessera", "check", "a.json", "b.json"]).unwrap();
        match cli.command {
            Command::Check { files } => {
                assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
            }
            other => panic!("expected check, got {other:?}"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_check_requires_a_file() {
        assert!(Cli::try_parse_from(["tessera", "check"]).is_err());
    }

    #[test]
    fn test_roundtrip_flags() {
        let cli = Cli::try_parse_from([
            "tessera",
            "roundtrip",
            "patient.json",
            "--pretty",
            "--verify",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(
            cli.command,
            Command::Roundtrip { ref file, verify: true } if file == &PathBuf::from("patient.json")
        ));
    }

    #[test]
    fn test_types_takes_no_arguments() {
        let cli = Cli::try_parse_from(["tessera", "types"]).unwrap();
        assert!(matches!(cli.command, Command::Types));
        assert!(Cli::try_parse_from(["tessera", "types", "extra"]).is_err());
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["tessera"]).is_err());
    }
}
