//! # Resolve Subcommand
//!
//! Resolves a region name against the MOIS registry and prints the
//! matching 10-digit codes, one per line or as a JSON array.

use std::process::ExitCode;

use clap::Args;

use jibeon_core::Query;
use jibeon_mois_client::{RegistryConfig, ResolveOptions, Resolver};

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Region name, e.g. "서울특별시 강남구 개포동" or "양재동".
    #[arg(long, short = 'q')]
    pub query: String,

    /// Service key (decoded or pre-encoded form). Falls back to the
    /// PUBLICDATA_KEY environment variable.
    #[arg(long)]
    pub key: Option<String>,

    /// Page number for the direct lookup.
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page for every fetch.
    #[arg(long, default_value_t = 1000)]
    pub rows: u32,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 12)]
    pub timeout: u64,

    /// Disable the nationwide scan fallback.
    #[arg(long)]
    pub no_scan: bool,

    /// Print the codes as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Print the resolution trace to stderr when nothing is found.
    #[arg(long)]
    pub debug: bool,
}

/// Build a live resolver from a key flag or the environment.
pub(crate) fn build_resolver(
    key: Option<&str>,
    timeout_secs: u64,
) -> anyhow::Result<Resolver> {
    let config = match key {
        Some(k) => RegistryConfig::with_key(k)?,
        None => RegistryConfig::from_env()?,
    }
    .with_timeout_secs(timeout_secs);
    Ok(Resolver::new(config)?)
}

pub fn run(args: ResolveArgs) -> anyhow::Result<ExitCode> {
    let query = Query::new(&args.query)?;
    let resolver = build_resolver(args.key.as_deref(), args.timeout)?;
    let options = ResolveOptions {
        page: args.page,
        page_size: args.rows,
        scan: !args.no_scan,
    };

    let resolution = resolver.resolve(&query, &options)?;
    tracing::debug!(codes = resolution.codes.len(), "resolution complete");

    if args.json {
        println!("{}", serde_json::to_string(&resolution.codes)?);
    } else {
        for code in &resolution.codes {
            println!("{code}");
        }
    }

    if resolution.is_empty() {
        if args.debug {
            eprintln!("{}", serde_json::to_string_pretty(&resolution.trace)?);
        }
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        args: ResolveArgs,
    }

    #[test]
    fn defaults_match_registry_conventions() {
        let parsed = Harness::try_parse_from(["jibeon", "--query", "양재동"]).unwrap();
        assert_eq!(parsed.args.page, 1);
        assert_eq!(parsed.args.rows, 1000);
        assert_eq!(parsed.args.timeout, 12);
        assert!(!parsed.args.no_scan);
    }

    #[test]
    fn query_flag_is_required() {
        assert!(Harness::try_parse_from(["jibeon"]).is_err());
    }

    #[test]
    fn short_query_flag() {
        let parsed = Harness::try_parse_from(["jibeon", "-q", "양재동", "--no-scan"]).unwrap();
        assert_eq!(parsed.args.query, "양재동");
        assert!(parsed.args.no_scan);
    }
}
