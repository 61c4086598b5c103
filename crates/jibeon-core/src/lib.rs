//! # jibeon-core — Foundational Types
//!
//! Validated domain primitives for Korean legal-district (법정동)
//! addressing: 10-digit region codes, 19-digit parcel number units
//! (PNU), lot designations (지번), and normalized lookup queries.
//!
//! All values here are immutable value objects constructed, used, and
//! discarded within a single resolution or encoding call. Invalid input
//! is rejected at construction time; nothing in this crate performs I/O.

pub mod codes;
pub mod error;
pub mod lot;
pub mod query;

pub use codes::{Pnu, RegionCode};
pub use error::ValidationError;
pub use lot::LotSpec;
pub use query::Query;
