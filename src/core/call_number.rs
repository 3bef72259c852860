//! LC call number tokenization.
//!
//! Splits a cleaned call number into classification letters, a
//! classification number, up to three cutters, and a trailing publication
//! year. Nothing here fails: unrecognizable text simply leaves segments
//! unset, and the sort key orders unset segments after everything real.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

/// 1-3 classification letters, then an optional integer/decimal number.
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Z]{1,3})\s*([0-9]+(?:\.[0-9]+)?)?").expect("class regex")
});

/// One cutter: optional period, optional spaces, a letter, then digits.
static CUTTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.?\s*([A-Z])\s*([0-9]+)").expect("cutter regex"));

/// Maximal digit runs; year candidates are the 4-digit runs in 1000-2999.
static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run regex"));

static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Number of cutter slots that participate in ordering.
pub const MAX_CUTTERS: usize = 3;

/// Classification number: a non-negative decimal such as `76.73`.
///
/// Ordering uses `total_cmp`, which coincides with numeric order for the
/// regex-constrained finite values that reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassNumber(f64);

impl ClassNumber {
    fn parse(digits: &str) -> Option<Self> {
        digits.parse::<f64>().ok().map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for ClassNumber {}

impl PartialOrd for ClassNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A cutter pair, compared letter first, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutter {
    pub letter: char,
    pub number: u64,
}

/// Tokenizer output.
///
/// Cutters appear in source order, truncated to [`MAX_CUTTERS`]. A `None`
/// segment means the text did not carry it — or carried nothing the
/// tokenizer recognizes; the two cases are deliberately indistinguishable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCallNumber {
    pub letters: Option<String>,
    pub number: Option<ClassNumber>,
    pub cutters: Vec<Cutter>,
    pub year: Option<u16>,
}

/// Tokenize a call number string.
///
/// The classification segment is matched at the start; cutters and the
/// year are scanned over the literal remainder, so a malformed head can
/// feed the cutter scan. That is the shipped behavior and is kept as-is.
pub fn parse(raw: &str) -> ParsedCallNumber {
    let normalized = normalize_for_parse(raw);
    if normalized.is_empty() {
        return ParsedCallNumber::default();
    }

    let (letters, number, rest) = match CLASS_RE.captures(&normalized) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            let letters = caps.get(1).map(|m| m.as_str().to_string());
            let number = caps.get(2).and_then(|m| ClassNumber::parse(m.as_str()));
            (letters, number, &normalized[end..])
        }
        None => (None, None, normalized.as_str()),
    };

    ParsedCallNumber {
        letters,
        number,
        cutters: scan_cutters(rest),
        year: scan_year(rest),
    }
}

/// Uppercase and canonicalize spacing so segment matching tolerates sloppy
/// input: whitespace runs become one space, `..` and ` .` become `.`.
fn normalize_for_parse(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let collapsed = WS_RUN_RE.replace_all(&upper, " ");
    collapsed
        .replace("..", ".")
        .replace(" .", ".")
        .trim()
        .to_string()
}

fn scan_cutters(rest: &str) -> Vec<Cutter> {
    let mut cutters = Vec::new();
    for caps in CUTTER_RE.captures_iter(rest) {
        if cutters.len() == MAX_CUTTERS {
            break;
        }
        let Some(letter) = caps[1].chars().next() else {
            continue;
        };
        // A digit run too long for u64 is garbage, not a cutter
        let Ok(number) = caps[2].parse::<u64>() else {
            continue;
        };
        cutters.push(Cutter { letter, number });
    }
    cutters
}

/// Last maximal 4-digit run valued in 1000-2999. A maximal run is exactly
/// "four digits not adjacent to other digits".
fn scan_year(rest: &str) -> Option<u16> {
    let mut year = None;
    for m in DIGIT_RUN_RE.find_iter(rest) {
        let run = m.as_str();
        if run.len() != 4 {
            continue;
        }
        if let Ok(value) = run.parse::<u16>() {
            if (1000..=2999).contains(&value) {
                year = Some(value);
            }
        }
    }
    year
}
