//! Field cleanup rules for catalog exports.
//!
//! Availability splitting, "and others" removal, and the space-collapsing
//! rule that compacts call numbers while keeping one space before a
//! trailing year.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::record::Record;

/// `location ; <dropped> ; call number ; <dropped…>`
static AVAILABILITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^;]*);[^;]*;([^;]*);").expect("availability regex"));

/// Whole-word "and others", any case.
static AND_OTHERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\band others\b").expect("and-others regex"));

static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// A single space immediately before four digits ending the string.
static TRAILING_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) ([0-9]{4})$").expect("trailing year regex"));

/// Split a semicolon-delimited availability string into its shelving
/// location and the raw call-number fragment.
///
/// The segment before the first `;` is the location; the segment between
/// the second and third `;` is the call-number fragment. Everything else is
/// dropped. A string with fewer than three semicolons keeps its whole
/// trimmed text as the location and yields an empty fragment.
pub fn split_availability(text: &str) -> (String, String) {
    let s = text.trim();
    if s.is_empty() {
        return (String::new(), String::new());
    }

    match AVAILABILITY_RE.captures(s) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (s.to_string(), String::new()),
    }
}

/// Remove the whole-word phrase "and others" (case-insensitive), then trim.
pub fn strip_and_others(text: &str) -> String {
    AND_OTHERS_RE.replace_all(text, "").trim().to_string()
}

/// Compact a call number: collapse whitespace runs to single spaces, then
/// drop every space except one immediately preceding a trailing 4-digit
/// group at the very end of the string.
///
/// Idempotent: cleaning an already-cleaned value changes nothing.
pub fn clean_call_number(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let collapsed = WS_RUN_RE.replace_all(trimmed, " ");

    // Greedy head capture pins the space directly before the final digits
    match TRAILING_YEAR_RE.captures(&collapsed) {
        Some(caps) => format!("{} {}", caps[1].replace(' ', ""), &caps[2]),
        None => collapsed.replace(' ', ""),
    }
}

/// Apply the cleanup rules to one record.
///
/// The availability string is split into location and fragment; the
/// fragment and both call-number fields are compacted. "and others" is
/// stripped from the LC call number before compaction.
pub fn normalize_record(record: &mut Record) {
    let (location, cn_from_pa) = split_availability(&record.physical_availability);
    record.physical_availability = location;
    record.cn_from_pa = clean_call_number(&cn_from_pa);

    record.local_call_number = clean_call_number(&record.local_call_number);
    record.lc_call_number = clean_call_number(&strip_and_others(&record.lc_call_number));
}

/// Normalize a whole batch without ranking it.
pub fn clean_batch(mut records: Vec<Record>) -> Vec<Record> {
    for record in &mut records {
        normalize_record(record);
    }
    records
}
