//! # formguard CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

/// formguard — declarative field and form validation.
///
/// Checks schema documents and validates values against them, printing
/// `{isValid, errors, failedRules?}` as JSON.
#[derive(Parser, Debug)]
#[command(name = "formguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Finalize every field of a schema document.
    Check(formguard_cli::check::CheckArgs),
    /// Validate a form value document.
    Validate(formguard_cli::validate::ValidateArgs),
    /// Validate one string against one field.
    Value(formguard_cli::value::ValueArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing on stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let summary = formguard_cli::check::run_check(&args)?;
            print_json(&summary, true)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate(args) => {
            let result = formguard_cli::validate::run_validate(&args)?;
            print_json(&result, args.pretty)?;
            Ok(exit_code(result.is_valid()))
        }
        Commands::Value(args) => {
            let result = formguard_cli::value::run_value(&args)?;
            print_json(&result, false)?;
            Ok(exit_code(result.is_valid()))
        }
    }
}

fn print_json(value: &impl Serialize, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
