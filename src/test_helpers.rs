//! Shared test utilities for the thesis-roster test suite.
//!
//! Provides entry builders and roster-file writers used across the unit
//! tests. Entries come pre-filled with plausible values so individual tests
//! only spell out the fields they actually assert on.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let entries = vec![entry("Adams, Jane", "2001"), entry("Zimmer, Hans", "1999")];
//! let (tmp, path) = write_roster(&entries);
//! let parsed = parse_file(&path, None).unwrap();
//! assert_eq!(parsed.len(), 2);
//! ```

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::record::Thesis;

// =========================================================================
// Entry builders
// =========================================================================

/// Build an entry with the given author and year and plausible filler for
/// every other field.
pub fn entry(author: &str, year: &str) -> Thesis {
    Thesis {
        author: author.to_string(),
        year: year.to_string(),
        title: format!("A study by {author}"),
        advisor: "Advisor, The".to_string(),
        affiliation: "State University".to_string(),
        degree: "PhD".to_string(),
        url: format!("https://theses.example.edu/{year}"),
    }
}

/// Build an entry overriding the degree and URL as well.
///
/// An empty `url` makes the entry render without a URL cell.
pub fn entry_with(author: &str, year: &str, degree: &str, url: &str) -> Thesis {
    Thesis {
        degree: degree.to_string(),
        url: url.to_string(),
        ..entry(author, year)
    }
}

// =========================================================================
// Roster file fixtures
// =========================================================================

/// Serialize entries into the flat roster format: seven field lines per
/// entry, each group closed by a blank separator line.
pub fn roster_text(entries: &[Thesis]) -> String {
    let mut text = String::new();
    for e in entries {
        for field in [
            &e.author,
            &e.year,
            &e.title,
            &e.advisor,
            &e.affiliation,
            &e.degree,
            &e.url,
        ] {
            text.push_str(field);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

/// Write entries as a roster file in a fresh temp directory.
///
/// Returns the directory guard alongside the file path; dropping the guard
/// removes the file.
pub fn write_roster(entries: &[Thesis]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("superdarn_theses.txt");
    fs::write(&path, roster_text(entries)).unwrap();
    (tmp, path)
}
