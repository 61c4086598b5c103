//! Lookup-query normalization.
//!
//! A [`Query`] is the free-text region name handed to the registry:
//! trimmed, with internal whitespace runs collapsed to a single space.
//! The normalized string is used verbatim as the fetch filter and split
//! into tokens for row matching.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A normalized region-name query.
///
/// Empty or whitespace-only input is rejected at construction; a query
/// always holds at least one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Query(String);

impl Query {
    /// Normalize raw query text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuery`] if the input contains no
    /// non-whitespace characters.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = raw
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if normalized.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(normalized))
    }

    /// Access the normalized query string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace-delimited tokens of the query.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// True if every token of this query occurs as a substring of
    /// `haystack` (logical AND across tokens).
    pub fn matches(&self, haystack: &str) -> bool {
        self.tokens().all(|token| haystack.contains(token))
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Query {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
