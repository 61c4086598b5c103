//! Registry response envelope.
//!
//! The StanReginCd list operation wraps its payload in a named array of
//! blocks: `{"StanReginCd": [{"head": [...]}, {"row": [...]}]}`. Each
//! block contributes zero or more rows and optionally a header record
//! with pagination metadata. Envelope-format assumptions are localized
//! here; the rest of the pipeline sees typed rows.

use serde::{Deserialize, Serialize};

/// One row of the registry response.
///
/// `region_cd` and `locatadd_nm` are required; a row missing either is
/// an envelope error rather than a silently defaulted value. Candidate
/// codes are validated downstream by the filter, so `region_cd` stays a
/// plain string here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRow {
    /// Legal-district region code, possibly decorated.
    pub region_cd: String,
    /// Full address fragment (시도, 시군구, 읍면동 concatenated).
    pub locatadd_nm: String,
    /// Lowest-level address fragment; often empty.
    #[serde(default)]
    pub locallow_nm: String,
}

impl RegistryRow {
    /// The concatenated address text a query's tokens are matched
    /// against.
    pub fn address_text(&self) -> String {
        format!("{} {}", self.locatadd_nm, self.locallow_nm)
    }
}

/// Pagination / status metadata from the envelope's `head` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadRecord {
    #[serde(rename = "totalCount", default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(rename = "numOfRows", default, skip_serializing_if = "Option::is_none")]
    pub num_of_rows: Option<u64>,
    #[serde(rename = "pageNo", default, skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u64>,
    #[serde(rename = "RESULT", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultRecord>,
}

/// Service result code carried by some head records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "resultCode")]
    pub code: String,
    #[serde(rename = "resultMsg")]
    pub message: String,
}

/// Top-level response shape.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "StanReginCd", default)]
    blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(default)]
    head: Vec<HeadRecord>,
    #[serde(default)]
    row: Vec<RegistryRow>,
}

impl Envelope {
    /// Flatten the block structure: rows concatenated in block order,
    /// first non-empty head wins.
    pub(crate) fn into_parts(self) -> (Vec<RegistryRow>, HeadRecord) {
        let mut rows = Vec::new();
        let mut head: Option<HeadRecord> = None;
        for block in self.blocks {
            if head.is_none() {
                head = block.head.into_iter().next();
            }
            rows.extend(block.row);
        }
        (rows, head.unwrap_or_default())
    }
}
