//! Enum wrapper generator CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a header from a schema
//! enumgen --input schemas/side.yaml --output include/trading/side.h
//!
//! # Print the header without writing anything
//! enumgen --input schemas/side.yaml --output include/trading/side.h --dry-run
//!
//! # Show what the generator is doing
//! enumgen -vv -i schemas/side.yaml -o include/trading/side.h
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueHint};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use enumgen::generate;

/// Generate a type-safe C++ enum wrapper from a YAML schema
#[derive(Parser, Debug)]
#[command(name = "enumgen", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Schema document describing the enum
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Header file to write (parent directories are created)
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Print the generated header to stdout without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

const AFTER_HELP: &str = "\
SCHEMA FORMAT:
  namespace: trading          # all lower case
  enum_name: Side
  underlying_type: int8_t
  enum_entries:               # all 'NAME' or all 'NAME, VALUE'
    - BUY, 1
    - SELL, 2

LOGGING:
  RUST_LOG overrides -v when set, e.g. RUST_LOG=enumgen=debug
";

fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,enumgen=info".to_string(),
            2 => "info,enumgen=debug".to_string(),
            _ => "debug,enumgen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs always go to stderr so --dry-run output stays clean
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        dry_run = cli.dry_run,
        "generating enum"
    );

    match generate(&cli.input, &cli.output, cli.dry_run) {
        Ok(header) => {
            if cli.dry_run {
                print!("{header}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} Failed to generate enum for {}, error {}",
                "error:".red().bold(),
                cli.input.display(),
                e
            );
            ExitCode::FAILURE
        }
    }
}
