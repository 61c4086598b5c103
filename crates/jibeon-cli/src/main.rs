//! # jibeon CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// 법정동코드 / PNU toolkit.
///
/// Resolves free-text region names into canonical 10-digit region codes
/// against the MOIS standard region-code registry, and generates
/// 19-digit parcel number units from a region code and a lot
/// designation.
#[derive(Parser, Debug)]
#[command(name = "jibeon", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve a region name into 10-digit region codes.
    Resolve(jibeon_cli::resolve::ResolveArgs),
    /// Generate a 19-digit PNU from a region and a lot designation.
    Pnu(jibeon_cli::pnu::PnuArgs),
}

fn main() -> anyhow::Result<std::process::ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => jibeon_cli::resolve::run(args),
        Commands::Pnu(args) => jibeon_cli::pnu::run(args),
    }
}
