//! HTML fragment rendering.
//!
//! Stage 3 of the thesis-roster pipeline. Walks the sorted entries and emits
//! the listing fragment that gets spliced into the theses page between the
//! begin/end markers. The output is a fragment, not a document — no doctype,
//! no `<head>`; the page around it is owned elsewhere and still uses the
//! legacy centered layout, so the fragment keeps `<center>` and `align`
//! attributes.
//!
//! ## Fragment Structure
//!
//! ```text
//! <!-- *** BEGIN THESIS/DISSERTATION CONTENT HERE *** --!>
//! <div align="center">
//!   <b>Jump to:</b> ...                        # navigation (variant-specific)
//!   <a name="..."></a>                         # anchors interleaved below
//!   <table>...</table><br>                     # one bordered table per entry
//!   ...
//!   <center>Number of items: <b>N</b></center>
//!   <center>(X MS | Y PhD)</center>
//! </div>
//! <!-- *** END THESIS/DISSERTATION CONTENT HERE *** --!>
//! ```
//!
//! The two variants differ only in navigation and grouping: the alphabetical
//! listing jumps across four fixed author buckets, the year listing jumps to
//! per-year headings. The per-entry tables are identical in both.
//!
//! ## Verbatim Fields
//!
//! Field values pass through to the HTML exactly as read, including the link
//! `href`: the roster is curated by hand and entries carry deliberate
//! entities and markup that escaping would corrupt. Splices go through
//! [`PreEscaped`] for that reason. First-letter normalization affects sort
//! comparison only, never display.
//!
//! HTML is assembled with [maud](https://maud.lambda.xyz/) templates over
//! precomputed anchor placements; the placement helpers are pure and
//! unit-tested on their own.

use crate::config::TableConfig;
use crate::order::Listing;
use crate::record::{DegreeTally, Thesis};
use maud::{Markup, PreEscaped, html};

/// Splice markers matched literally by the publishing side, including the
/// historical `--!>` close.
pub const BEGIN_MARKER: &str = "<!-- *** BEGIN THESIS/DISSERTATION CONTENT HERE *** --!>";
pub const END_MARKER: &str = "<!-- *** END THESIS/DISSERTATION CONTENT HERE *** --!>";

/// The four fixed alphabetical buckets: starting letter and jump label.
const AUTHOR_BUCKETS: [(char, &str); 4] = [('A', "A-G"), ('H', "H-N"), ('O', "O-U"), ('V', "V-Z")];

/// Render the complete listing fragment.
///
/// `entries` must already be sorted under the matching [`Listing`] — anchor
/// placement walks them in display order.
pub fn render_listing(entries: &[Thesis], listing: Listing, table: &TableConfig) -> Markup {
    let body = match listing {
        Listing::Author => author_listing(entries, table),
        Listing::Year => year_listing(entries, table),
    };
    let tally = DegreeTally::count(entries);

    html! {
        (PreEscaped(BEGIN_MARKER)) "\n"
        div align="center" {
            (body)
            (summary(entries.len(), tally))
        }
        "\n" (PreEscaped(END_MARKER)) "\n"
    }
}

// ============================================================================
// Listing variants
// ============================================================================

/// The alphabetical listing: fixed-bucket navigation, then author-sorted
/// tables with bucket anchors interleaved.
fn author_listing(entries: &[Thesis], table: &TableConfig) -> Markup {
    let anchors = bucket_anchors(entries);

    html! {
        (jump_label())
        @for (i, (_, label)) in AUTHOR_BUCKETS.iter().enumerate() {
            a href={ "#" (label) } { (label) }
            @if i + 1 < AUTHOR_BUCKETS.len() { (PreEscaped("&nbsp;| ")) }
        }
        br; br;
        @for (entry, anchor) in entries.iter().zip(&anchors) {
            @if let Some(label) = anchor {
                a name=(label) {}
            }
            (entry_table(entry, table))
        }
    }
}

/// The year listing: per-year navigation, then year-sorted tables with an
/// anchor and centered heading opening each year group.
fn year_listing(entries: &[Thesis], table: &TableConfig) -> Markup {
    let years = distinct_years(entries);
    let breaks = year_breaks(entries);

    html! {
        div style="width:800px;" {
            (jump_label())
            @for (i, year) in years.iter().enumerate() {
                a href={ "#" (raw(year)) } { (raw(year)) }
                @if i + 1 < years.len() { (PreEscaped("&nbsp;| ")) }
            }
        }
        br; br;
        @for (entry, year_open) in entries.iter().zip(&breaks) {
            @if let Some(year) = year_open {
                a name=(raw(year)) {}
                center { b { (raw(year)) } }
                br;
            }
            (entry_table(entry, table))
        }
    }
}

// ============================================================================
// Shared components
// ============================================================================

/// Splice a field value through un-escaped (see module docs).
fn raw(text: &str) -> PreEscaped<&str> {
    PreEscaped(text)
}

/// The bold `Jump to:` label opening both navigation variants.
fn jump_label() -> Markup {
    html! { b { "Jump to:" } (PreEscaped("&nbsp;")) }
}

/// One bordered table for a single entry. Both variants share this layout.
///
/// The degree row gains a right-aligned link cell only when the entry has a
/// url; an empty url leaves the row with its single cell.
fn entry_table(entry: &Thesis, table: &TableConfig) -> Markup {
    html! {
        table style={ "border:1px solid black; width:" (table.width_px) "px;" } {
            tr { td { b { "Author:" } " " (raw(&entry.author)) } }
            tr { td { b { "Year:" } " " (raw(&entry.year)) } }
            tr { td { b { "Title:" } " " (raw(&entry.title)) } }
            tr { td { b { "Advisor:" } " " (raw(&entry.advisor)) } }
            tr { td { b { "Affiliation:" } " " (raw(&entry.affiliation)) } }
            tr {
                td { b { "Degree:" } " " (raw(&entry.degree)) }
                @if entry.has_url() {
                    td align="right" {
                        a href=(raw(&entry.url)) target="_blank" { "URL" }
                    }
                }
            }
        }
        br;
    }
}

/// The two centered summary lines: item count and degree breakdown.
fn summary(total: usize, tally: DegreeTally) -> Markup {
    html! {
        center { "Number of items: " b { (total) } }
        center { "(" (tally.ms) " MS | " (tally.phd) " PhD)" }
    }
}

// ============================================================================
// Anchor placement
// ============================================================================

/// For each author-sorted entry, the bucket label whose anchor goes in front
/// of its table, if any.
///
/// Buckets are consumed in order, at most once each. An entry consumes every
/// bucket up to the one its initial belongs to, but only that bucket gets an
/// anchor — a bucket no entry falls into is skipped without one. Entries
/// whose initial precedes `A` (digits, punctuation, empty author) never
/// trigger an anchor.
fn bucket_anchors(entries: &[Thesis]) -> Vec<Option<&'static str>> {
    let mut anchors = vec![None; entries.len()];
    let mut next_bucket = 0;

    for (i, entry) in entries.iter().enumerate() {
        if next_bucket >= AUTHOR_BUCKETS.len() {
            break;
        }
        let Some(initial) = entry.author_initial() else {
            continue;
        };
        if let Some(bucket) = bucket_of(initial)
            && bucket >= next_bucket
        {
            anchors[i] = Some(AUTHOR_BUCKETS[bucket].1);
            next_bucket = bucket + 1;
        }
    }

    anchors
}

/// Index of the bucket an uppercased initial falls into: the last bucket
/// whose starting letter is at or below the initial. `None` below `A`.
fn bucket_of(initial: char) -> Option<usize> {
    AUTHOR_BUCKETS
        .iter()
        .rposition(|(start, _)| initial >= *start)
}

/// For each year-sorted entry, its year when it opens a new year group
/// (differs from the previous entry's year), else `None`. The first entry
/// always opens a group.
fn year_breaks(entries: &[Thesis]) -> Vec<Option<&str>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == 0 || entries[i - 1].year != entry.year {
                Some(entry.year.as_str())
            } else {
                None
            }
        })
        .collect()
}

/// Distinct year values in first-appearance order.
fn distinct_years(entries: &[Thesis]) -> Vec<&str> {
    year_breaks(entries).into_iter().flatten().collect()
}

// ============================================================================
// Tests
// ============================================================================
