//! Result ranking.
//!
//! Orders catalog records for display according to the selected sort key.

use crate::catalog::ResultRecord;
use crate::error::SortKeyError;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Field used to order the results list (always highest first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by match percentage
    #[default]
    Relevance,
    /// Sort by citation count
    Citations,
    /// Sort by publication year
    Year,
}

impl SortKey {
    /// All keys in selector order.
    pub const ALL: [SortKey; 3] = [SortKey::Relevance, SortKey::Citations, SortKey::Year];

    /// Get the key that follows this one in the selector.
    ///
    /// # Details
    /// Cycles: Relevance -> Citations -> Year -> Relevance
    pub fn next(self) -> Self {
        match self {
            SortKey::Relevance => SortKey::Citations,
            SortKey::Citations => SortKey::Year,
            SortKey::Year => SortKey::Relevance,
        }
    }

    /// Get the key that precedes this one in the selector.
    pub fn prev(self) -> Self {
        match self {
            SortKey::Relevance => SortKey::Year,
            SortKey::Citations => SortKey::Relevance,
            SortKey::Year => SortKey::Citations,
        }
    }

    /// Name used in intents and config files.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Citations => "citations",
            SortKey::Year => "year",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Citations => "Citations",
            SortKey::Year => "Year",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortKeyError(s.to_string()))
    }
}

/// Rank records by the given key.
///
/// # Arguments
/// * `records` - Source records, left untouched
/// * `key` - Field to order by, highest first
///
/// # Returns
/// * `Vec<&ResultRecord>` - New ordering; records with equal keys keep their source order
pub fn rank(records: &[ResultRecord], key: SortKey) -> Vec<&ResultRecord> {
    let mut ranked: Vec<&ResultRecord> = records.iter().collect();
    // sort_by_key is stable
    match key {
        SortKey::Relevance => ranked.sort_by_key(|r| Reverse(r.relevance)),
        SortKey::Citations => ranked.sort_by_key(|r| Reverse(r.citations)),
        SortKey::Year => ranked.sort_by_key(|r| Reverse(r.year)),
    }
    ranked
}

/// Rank records by an optional key.
///
/// # Details
/// `None` stands for an unrecognized key and keeps the source order.
pub fn rank_or_identity(records: &[ResultRecord], key: Option<SortKey>) -> Vec<&ResultRecord> {
    match key {
        Some(key) => rank(records, key),
        None => records.iter().collect(),
    }
}
