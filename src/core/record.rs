//! Catalog record model and ranking-field selection.

use indexmap::IndexMap;

/// Input column carrying the record title.
pub const TITLE: &str = "Title";
/// Input column carrying the locally assigned call number.
pub const LOCAL_CALL_NUMBER: &str = "Local Call Number";
/// Input column carrying the LC call number.
pub const LC_CALL_NUMBER: &str = "LC Call Number";
/// Input column carrying the availability string.
pub const PHYSICAL_AVAILABILITY: &str = "Physical Availability";
/// Derived column: the call number recovered from the availability string.
pub const CN_FROM_PA: &str = "CNfromPA";

/// One catalog entry.
///
/// The columns the pipeline works on are typed fields; every other input
/// column rides along untouched in `extra`, in input order. Identity is the
/// record's position in the ingested batch and is never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub local_call_number: String,
    pub lc_call_number: String,
    pub physical_availability: String,
    pub cn_from_pa: String,
    pub extra: IndexMap<String, String>,
}

impl Record {
    /// The call number that represents this record for ranking.
    ///
    /// First non-empty trimmed value among LC Call Number, Local Call
    /// Number, CNfromPA, in that fixed priority order; empty when all three
    /// are blank. Selection never replaces the stored field values.
    pub fn ranking_source(&self) -> &str {
        [
            self.lc_call_number.as_str(),
            self.local_call_number.as_str(),
            self.cn_from_pa.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or("")
    }

    /// Look up a value by input column name, typed fields included.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            TITLE => Some(&self.title),
            LOCAL_CALL_NUMBER => Some(&self.local_call_number),
            LC_CALL_NUMBER => Some(&self.lc_call_number),
            PHYSICAL_AVAILABILITY => Some(&self.physical_availability),
            CN_FROM_PA => Some(&self.cn_from_pa),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}

/// A record annotated with its computed shelf rank (1-based).
#[derive(Debug, Clone)]
pub struct RankedRecord {
    pub record: Record,
    pub rank: usize,
}
