//! Tessera command-line tool.
//!
//! Checks and round-trips FHIR JSON resources.

use clap::Parser;
use tessera_cli::commands::{check_files, render, resource_types, round_trip};
use tessera_cli::{Cli, Command, init_logging};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Check { files } => {
            let outcomes = check_files(&files);
            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(resource_type) => {
                        println!("ok    {} ({})", outcome.path.display(), resource_type)
                    }
                    Err(e) => println!("FAIL  {}: {:#}", outcome.path.display(), e),
                }
            }
            info!(files = outcomes.len(), failed, "check finished");
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Command::Roundtrip { file, verify } => {
            let result = round_trip(&file, verify)?;
            println!("{}", render(&result.output, cli.pretty)?);
            if !result.differences.is_empty() {
                for difference in &result.differences {
                    eprintln!("difference: {}", difference);
                }
                anyhow::bail!(
                    "{} differs from its re-encoding in {} place(s)",
                    file.display(),
                    result.differences.len()
                );
            }
        }
        Command::Types => {
            for resource_type in resource_types() {
                println!("{}", resource_type);
            }
        }
    }

    Ok(())
}
