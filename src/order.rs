//! Record ordering.
//!
//! Stage 2 of the thesis-roster pipeline. Sorts parsed entries in place
//! under the composite order selected by [`Listing`]. The enum is shared
//! with the renderer — the alphabetical listing only makes sense over
//! author-sorted entries, and the year listing over year-sorted entries, so
//! one strategy value drives both stages.

use crate::record::Thesis;
use std::cmp::Ordering;

/// The listing variant: one sort order paired with its navigation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Alphabetical by author (fixed A–Z jump buckets); ties broken by year
    /// ascending.
    Author,
    /// Most recent year first (per-year anchors and headings); ties broken
    /// by author ascending.
    Year,
}

/// How year fields compare.
///
/// Years are free text, and the published listing's long-standing behavior
/// is raw byte-string comparison: four-digit years order like numbers,
/// anything else (`"TBD"`, `"c. 1998"`) orders like text. [`Numeric`] is an
/// opt-in refinement for rosters that need `"999"` below `"2020"`.
///
/// [`Numeric`]: YearComparison::Numeric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearComparison {
    /// Raw string comparison (the default).
    #[default]
    Lexicographic,
    /// Compare as unsigned integers when both sides parse as numbers.
    /// Numeric years order as a class below non-numeric ones, which keep
    /// comparing as raw strings among themselves.
    Numeric,
}

/// Sort entries in place under the given listing's composite order.
///
/// Both orders are total, and `sort_by` is stable: entries whose author and
/// year keys both tie keep their input order.
pub fn sort_entries(entries: &mut [Thesis], listing: Listing, years: YearComparison) {
    match listing {
        Listing::Author => entries.sort_by(|a, b| {
            cmp_authors(a, b).then_with(|| cmp_years(&a.year, &b.year, years))
        }),
        Listing::Year => entries.sort_by(|a, b| {
            cmp_years(&b.year, &a.year, years).then_with(|| cmp_authors(a, b))
        }),
    }
}

/// Compare author fields with the first character ASCII-uppercased on both
/// sides. The rest of the string compares byte-for-byte, case and all.
fn cmp_authors(a: &Thesis, b: &Thesis) -> Ordering {
    a.author_key().cmp(&b.author_key())
}

fn cmp_years(a: &str, b: &str, mode: YearComparison) -> Ordering {
    match mode {
        YearComparison::Lexicographic => a.cmp(b),
        // Class-then-value keeps the relation total: mixing the numeric and
        // string comparisons per pair would be intransitive ("99" < "100"
        // numerically, "100" < "1OO" < "99" as strings).
        YearComparison::Numeric => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        },
    }
}
