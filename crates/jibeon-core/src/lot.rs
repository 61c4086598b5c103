//! # Lot-Number Parsing
//!
//! Parses free-text lot designations (지번) such as `"2-14"`,
//! `"산 176-18"`, or `"개포동 176"` into a structured [`LotSpec`].
//!
//! A standalone "산" token marks a mountain parcel; the first
//! `<digits>` run, optionally followed by `-<digits>`, supplies the main
//! and sub lot numbers. Surrounding non-numeric text (a dong name, for
//! example) is ignored.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A parsed lot designation: mountain flag, main number, sub number.
///
/// Produced by [`LotSpec::parse`]; consumed by
/// [`Pnu::encode`](crate::Pnu::encode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LotSpec {
    /// True for mountain (산) parcels, false for ordinary (대지) parcels.
    pub mountain: bool,
    /// Main lot number (본번).
    pub main: u32,
    /// Sub lot number (부번); 0 when the lot has no sub number.
    pub sub: u32,
}

impl LotSpec {
    /// Parse a free-text lot designation.
    ///
    /// The first standalone "산" token (bounded by whitespace or string
    /// edges) sets the mountain flag and is removed before number
    /// extraction; only that first occurrence is removed. The first
    /// digit run is the main number; an immediately following
    /// `-<digits>` is the sub number, defaulting to 0 when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LotFormat`] if no digit sequence is
    /// found anywhere in the text.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let (mountain, remainder) = strip_mountain_marker(text);
        let (main, sub) = first_lot_number(&remainder)
            .ok_or_else(|| ValidationError::LotFormat(text.to_string()))?;
        Ok(Self {
            mountain,
            main,
            sub,
        })
    }
}

impl std::str::FromStr for LotSpec {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for LotSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mountain {
            write!(f, "산 ")?;
        }
        write!(f, "{}", self.main)?;
        if self.sub != 0 {
            write!(f, "-{}", self.sub)?;
        }
        Ok(())
    }
}

/// Detect and remove the first standalone "산" token.
///
/// Standalone means bounded by whitespace or the string edges on both
/// sides; a fused prefix like "산176" is not a marker.
fn strip_mountain_marker(text: &str) -> (bool, String) {
    for (idx, ch) in text.char_indices() {
        if ch != '산' {
            continue;
        }
        let before_ok = text[..idx]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        let after = idx + ch.len_utf8();
        let after_ok = text[after..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if before_ok && after_ok {
            let mut stripped = String::with_capacity(text.len() - ch.len_utf8());
            stripped.push_str(&text[..idx]);
            stripped.push_str(&text[after..]);
            return (true, stripped);
        }
    }
    (false, text.to_string())
}

/// Find the first `<digits>` run, with an optional `-<digits>` suffix.
///
/// Returns `None` when no digit run exists or a number does not fit in
/// `u32`.
fn first_lot_number(text: &str) -> Option<(u32, u32)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let tail = &text[start..];
    let main_len = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    let main = tail[..main_len].parse().ok()?;

    let rest = &tail[main_len..];
    let sub = match rest.strip_prefix('-') {
        Some(after) => {
            let sub_len = after
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after.len());
            if sub_len == 0 {
                0
            } else {
                after[..sub_len].parse().ok()?
            }
        }
        None => 0,
    };
    Some((main, sub))
}
