//! Audioactive CLI
//!
//! Command-line front-end for the look-and-say engine: lists sequences,
//! prints the statistics table and the estimate of Conway's constant, and
//! exports statistics as CSV or JSON.

mod commands;
mod config;
mod export;

use audioactive_core::AudioactiveError;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ExportFormat, Request};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "audioactive")]
#[command(version)]
#[command(about = "Look-and-say sequence (audioactive decay) generator and statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "audioactive.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Parameters shared by every command
#[derive(Args)]
struct SequenceArgs {
    /// Seed term (digits 1-3 only)
    #[arg(short, long, env = "AUDIOACTIVE_SEED")]
    seed: Option<String>,

    /// Number of iterations
    #[arg(short = 'n', long, env = "AUDIOACTIVE_ITERATIONS")]
    iterations: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every term of the sequence
    Generate {
        #[command(flatten)]
        sequence: SequenceArgs,
    },

    /// Print per-term statistics, growth ratios and the λ estimate
    Stats {
        #[command(flatten)]
        sequence: SequenceArgs,

        /// Emit the full statistics document as JSON
        #[arg(long)]
        json: bool,

        /// Restrict atom detection to these element symbols
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },

    /// List the elements found in each term
    Atoms {
        #[command(flatten)]
        sequence: SequenceArgs,

        /// Restrict detection to these element symbols
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },

    /// Write statistics to a file
    Export {
        #[command(flatten)]
        sequence: SequenceArgs,

        /// Output file
        #[arg(short, long, default_value = "audioactive_statistics.csv")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Restrict atom detection to these element symbols
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stdout carries the command output
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(&cli.config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate { sequence } => {
            let request = Request::resolve(sequence.seed, sequence.iterations, &config)?;
            commands::run_generate(&mut out, &request)?;
        }

        Commands::Stats {
            sequence,
            json,
            symbols,
        } => {
            let request = Request::resolve(sequence.seed, sequence.iterations, &config)?;
            let atoms = commands::select_atoms(&symbols, &config)?;
            commands::run_stats(&mut out, &request, &atoms, json)?;
        }

        Commands::Atoms { sequence, symbols } => {
            let request = Request::resolve(sequence.seed, sequence.iterations, &config)?;
            let atoms = commands::select_atoms(&symbols, &config)?;
            commands::run_atoms(&mut out, &request, &atoms)?;
        }

        Commands::Export {
            sequence,
            output,
            format,
            symbols,
        } => {
            let request = Request::resolve(sequence.seed, sequence.iterations, &config)?;
            let atoms = commands::select_atoms(&symbols, &config)?;
            commands::run_export(&output, format, &request, &atoms)?;
            writeln!(out, "Statistics written to {:?}", output)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // reader went away early, e.g. `audioactive stats | head`
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {:?}", err);
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<AudioactiveError>()
                .map(AudioactiveError::code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_broken_pipe_detected() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(is_broken_pipe(&err));

        let wrapped: anyhow::Result<()> =
            Err(io::Error::from(io::ErrorKind::BrokenPipe)).context("writing table");
        assert!(is_broken_pipe(&wrapped.unwrap_err()));
    }

    #[test]
    fn test_other_errors_are_not_broken_pipe() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!is_broken_pipe(&err));

        let err = anyhow::Error::from(AudioactiveError::UnknownAtom("Xx".into()));
        assert!(!is_broken_pipe(&err));
    }
}
