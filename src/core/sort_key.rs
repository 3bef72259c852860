//! Fixed-shape, totally ordered sort keys for call numbers.
//!
//! Every call number string — however malformed — maps to exactly one key
//! of the same shape, so comparison is always defined and any batch can be
//! sorted deterministically.

use crate::core::call_number::{self, ClassNumber, Cutter, MAX_CUTTERS, ParsedCallNumber};

/// One key component: either a real value or a gap.
///
/// Variant order carries the ordering contract: every `Filled` value
/// compares below `Missing`, so records lacking a component shelve after
/// all records that have one — including after a literal `ZZZ` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot<T> {
    Filled(T),
    Missing,
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Slot::Filled(v),
            None => Slot::Missing,
        }
    }
}

/// Comparable key for one call number.
///
/// Field order is comparison order: class letters, class number, the three
/// cutter slots (each comparing letter before number), then year. The
/// derived `Ord` is the lexicographic tuple comparison over those
/// components, which makes the ordering a strict total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    class_letters: Slot<String>,
    class_number: Slot<ClassNumber>,
    cutter1: Slot<Cutter>,
    cutter2: Slot<Cutter>,
    cutter3: Slot<Cutter>,
    year: Slot<u16>,
}

impl SortKey {
    /// Assemble a key from tokenizer output, padding absent cutters so the
    /// shape is fixed regardless of how many the source string carried.
    pub fn from_parsed(parsed: &ParsedCallNumber) -> Self {
        let mut cutters = [Slot::Missing; MAX_CUTTERS];
        for (slot, cutter) in cutters.iter_mut().zip(&parsed.cutters) {
            *slot = Slot::Filled(*cutter);
        }
        let [cutter1, cutter2, cutter3] = cutters;

        Self {
            class_letters: parsed.letters.clone().into(),
            class_number: parsed.number.into(),
            cutter1,
            cutter2,
            cutter3,
            year: parsed.year.into(),
        }
    }
}

/// Parse and key a raw call number in one step.
pub fn sort_key(raw: &str) -> SortKey {
    SortKey::from_parsed(&call_number::parse(raw))
}
