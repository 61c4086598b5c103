//! # jibeon-cli — Command-Line Surface
//!
//! Handler modules for the `jibeon` binary. Each module owns one
//! subcommand's argument struct and its `run` function; `main.rs`
//! assembles and dispatches.
//!
//! Exit codes: 0 on success, 2 when a lookup legitimately found nothing
//! (distinguishable from transport or validation errors, which exit 1
//! through `anyhow`).

pub mod pnu;
pub mod resolve;
