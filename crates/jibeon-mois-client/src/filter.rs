//! Token filtering of fetched rows into validated region codes.

use std::collections::BTreeSet;

use jibeon_core::{Query, RegionCode};

use crate::envelope::RegistryRow;

/// Select the rows whose address text contains every query token, and
/// extract their validated region codes.
///
/// Matching is a logical AND across tokens — adding a more specific
/// token (a district name, say) narrows the result. Candidate codes are
/// digit-stripped and kept only when exactly 10 digits remain; malformed
/// codes are silently dropped. The returned set is deduplicated and
/// iterates in ascending lexicographic order.
pub fn filter_codes(rows: &[RegistryRow], query: &Query) -> BTreeSet<RegionCode> {
    rows.iter()
        .filter(|row| query.matches(&row.address_text()))
        .filter_map(|row| RegionCode::new(row.region_cd.as_str()).ok())
        .collect()
}
