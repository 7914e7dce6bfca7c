//! # tnsg Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `tnsg` scaffolding CLI. It handles:
//! - Normalizing the single-dash long flags kept for compatibility
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the generator and turning failures into a non-zero exit code
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! tnsg --help
//!
//! # Create two pages and a service, overwriting without asking
//! tnsg -y -p login auth/sign-up -s user-data
//!
//! # Same thing with the legacy spellings, logging at debug level
//! tnsg -vv -page login auth/sign-up -service user-data
//! ```
//!
//! Processing flow:
//! 1. Rewrite legacy flags, then parse args via Clap
//! 2. Configure logging (RUST_LOG wins over `-v`)
//! 3. Generate every requested artifact
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The generate command
mod common; // Shared utilities (fs, terminal ui)
mod core; // Core infrastructure (errors, config, naming, skeletons, module patching)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tnsg",
    about = "Scaffolding generator for NativeScript + Angular projects",
    long_about = "Creates pages, views, classes and services with their boilerplate files,\n\
                  and registers new page components in the application module.\n\
                  The single-dash forms -page, -service, -class, -view and -vi are accepted too.",
    version
)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse_from(commands::generate::normalize_legacy_flags(
        std::env::args_os(),
    ));

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::generate::handle_generate(cli.generate) {
        tracing::error!("Generation failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
