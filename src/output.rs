//! Terminal output formatting for the `check` command.
//!
//! The HTML fragment goes to stdout untouched; this module only covers the
//! plain-text inventory a maintainer reads before publishing. Formatting is
//! info-first: functions build `Vec<String>` lines so tests can assert on
//! them, and thin `print_*` wrappers do the actual printing.

use crate::record::{DegreeTally, Thesis};

/// Width titles are truncated to in the inventory listing.
const TITLE_WIDTH: usize = 60;

/// Format a 1-based entry position as a fixed-width ordinal, e.g. `001`.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate to at most `max` characters, appending an ellipsis when cut.
///
/// Counts characters rather than bytes so multi-byte titles never split
/// mid-character.
fn truncate_title(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

/// Format the inventory for a parsed roster.
///
/// One block per entry: ordinal, author, year and degree on the first line,
/// the truncated title indented beneath, and a `No URL` note for entries
/// missing one. A trailing summary repeats the counts the rendered fragment
/// will show.
pub fn format_check_output(entries: &[Thesis]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            entry.author,
            entry.year,
            entry.degree
        ));
        lines.push(format!("    {}", truncate_title(&entry.title, TITLE_WIDTH)));
        if !entry.has_url() {
            lines.push("    No URL".to_string());
        }
    }

    if !entries.is_empty() {
        lines.push(String::new());
    }

    let tally = DegreeTally::count(entries);
    lines.push(format!("Number of items: {}", entries.len()));
    lines.push(format!("({} MS | {} PhD)", tally.ms, tally.phd));

    lines
}

/// Print the inventory for a parsed roster.
pub fn print_check_output(entries: &[Thesis]) {
    for line in format_check_output(entries) {
        println!("{line}");
    }
}
