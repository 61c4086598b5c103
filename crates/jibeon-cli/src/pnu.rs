//! # Pnu Subcommand
//!
//! Generates a 19-digit PNU from a lot designation plus either an
//! explicit region code or a region name resolved through the registry.

use std::process::ExitCode;

use clap::Args;

use jibeon_core::{LotSpec, Pnu, Query, RegionCode};
use jibeon_mois_client::ResolveOptions;

/// Arguments for the pnu subcommand.
#[derive(Args, Debug)]
pub struct PnuArgs {
    /// Lot designation (지번), e.g. "2-14", "산 176-18", "176".
    #[arg(long)]
    pub lot: String,

    /// Region code to encode directly, skipping resolution.
    #[arg(long, conflicts_with = "query")]
    pub region_cd: Option<String>,

    /// Region name to resolve into the code, e.g. "서울특별시 서초구 양재동".
    #[arg(long, short = 'q', required_unless_present = "region_cd")]
    pub query: Option<String>,

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

    /// When resolution yields several codes, use the first instead of
    /// failing.
    #[arg(long)]
    pub first: bool,

    /// Print a JSON object instead of the bare PNU.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PnuArgs) -> anyhow::Result<ExitCode> {
    let lot: LotSpec = args.lot.parse()?;

    let region_cd = match &args.region_cd {
        Some(raw) => RegionCode::new(raw.as_str())?,
        None => {
            let query = Query::new(args.query.as_deref().unwrap_or_default())?;
            let resolver = crate::resolve::build_resolver(args.key.as_deref(), args.timeout)?;
            let options = ResolveOptions {
                page: args.page,
                page_size: args.rows,
                scan: !args.no_scan,
            };
            let resolution = resolver.resolve(&query, &options)?;

            let Some(code) = resolution.first() else {
                eprintln!("no region matched: {query}");
                return Ok(ExitCode::from(2));
            };
            if resolution.codes.len() > 1 && !args.first {
                let candidates: Vec<&str> =
                    resolution.codes.iter().map(RegionCode::as_str).collect();
                anyhow::bail!(
                    "query resolves to {} region codes (pass --first to take the first): {}",
                    resolution.codes.len(),
                    candidates.join(", ")
                );
            }
            code.clone()
        }
    };

    let pnu = Pnu::from_parts(&region_cd, &lot);
    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "pnu": pnu.as_str(),
                "region_cd": region_cd.as_str(),
                "mountain": lot.mountain,
                "main": lot.main,
                "sub": lot.sub,
            })
        );
    } else {
        println!("{pnu}");
    }
    Ok(ExitCode::SUCCESS)
}
