//! Roster file parsing.
//!
//! Stage 1 of the thesis-roster pipeline. Reads the flat text roster and
//! groups its lines into [`Thesis`] records for the orderer and renderer.
//!
//! ## Roster Format
//!
//! The roster is plain text with no header. Each entry is seven lines in a
//! fixed order, followed by one blank separator line:
//!
//! ```text
//! Thomas, Evan G.                                          # author
//! 2019                                                     # year
//! Interhemispheric comparisons of mid-latitude convection  # title
//! Ruohoniemi, J. M.                                        # advisor
//! Virginia Tech                                            # affiliation
//! PhD                                                      # degree
//! https://vtechworks.lib.vt.edu/handle/10919/89934         # url (may be empty)
//!                                                          # separator
//! Bland, Emma                                              # next entry...
//! ```
//!
//! ## Grouping Rules
//!
//! Lines are assigned purely by position. A counter cycles through eight
//! slots per entry: slots 0–6 take the line as the author, year, title,
//! advisor, affiliation, degree, and url fields in that fixed order; slot 7
//! is the separator position, and the line occupying it is consumed and
//! discarded whatever it contains. Nothing is validated beyond the grouping —
//! field content is free text and the roster is trusted as maintained.
//!
//! An entry is appended when its url line (slot 6) lands, so a truncated
//! trailing group of fewer than seven lines is dropped, never emitted
//! partially.

use crate::record::Thesis;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("entry limit exceeded: roster has more than {0} entries")]
    EntryLimit(usize),
}

/// Lines per entry group: seven fields plus the blank separator.
const GROUP_LEN: usize = 8;

/// Parse the roster file at `path`.
///
/// `max_entries` is the optional capacity cap from
/// [`crate::config::LimitsConfig`]; `None` grows without limit.
pub fn parse_file(path: &Path, max_entries: Option<usize>) -> Result<Vec<Thesis>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(BufReader::new(file), max_entries)
}

/// Parse roster records from any buffered reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped before storage. With a
/// `max_entries` cap, parsing fails as soon as one entry too many completes;
/// it never returns a truncated sequence.
pub fn parse_records<R: BufRead>(
    reader: R,
    max_entries: Option<usize>,
) -> Result<Vec<Thesis>, ParseError> {
    let mut entries = Vec::new();
    let mut current = Thesis::default();
    let mut slot = 0;

    for line in reader.lines() {
        let line = line?;
        match slot {
            0 => current.author = line,
            1 => current.year = line,
            2 => current.title = line,
            3 => current.advisor = line,
            4 => current.affiliation = line,
            5 => current.degree = line,
            6 => {
                current.url = line;
                entries.push(std::mem::take(&mut current));
                if let Some(limit) = max_entries
                    && entries.len() > limit
                {
                    return Err(ParseError::EntryLimit(limit));
                }
            }
            // Separator slot: the line is consumed by position, not content.
            _ => {}
        }
        slot = (slot + 1) % GROUP_LEN;
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{entry, roster_text, write_roster};

    const SINGLE: &str = "Thomas, Evan G.\n\
                          2019\n\
                          Interhemispheric comparisons of mid-latitude convection\n\
                          Ruohoniemi, J. M.\n\
                          Virginia Tech\n\
                          PhD\n\
                          https://vtechworks.lib.vt.edu/handle/10919/89934\n\
                          \n";

    #[test]
    fn single_entry_fields_assigned_in_order() {
        let entries = parse_records(SINGLE.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 1);

        let thesis = &entries[0];
        assert_eq!(thesis.author, "Thomas, Evan G.");
        assert_eq!(thesis.year, "2019");
        assert_eq!(
            thesis.title,
            "Interhemispheric comparisons of mid-latitude convection"
        );
        assert_eq!(thesis.advisor, "Ruohoniemi, J. M.");
        assert_eq!(thesis.affiliation, "Virginia Tech");
        assert_eq!(thesis.degree, "PhD");
        assert_eq!(thesis.url, "https://vtechworks.lib.vt.edu/handle/10919/89934");
    }

    #[test]
    fn entries_separated_by_blank_lines() {
        let text = roster_text(&[entry("Adams, Jane", "2019"), entry("Bland, Emma", "2021")]);
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, "Adams, Jane");
        assert_eq!(entries[1].author, "Bland, Emma");
    }

    #[test]
    fn separator_slot_discards_content_lines() {
        // A non-blank line in the separator position is thrown away and the
        // next line starts the following entry.
        let mut text = roster_text(&[entry("Adams, Jane", "2019")]);
        text.truncate(text.len() - 1); // drop the blank separator
        text.push_str("stray line in the separator slot\n");
        text.push_str(&roster_text(&[entry("Bland, Emma", "2021")]));

        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].author, "Bland, Emma");
    }

    #[test]
    fn empty_url_line_is_kept_empty() {
        let text = "Adams, Jane\n2019\nTitle\nAdvisor\nSchool\nMS\n\n\n";
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "");
    }

    #[test]
    fn crlf_terminators_stripped() {
        let text = SINGLE.replace('\n', "\r\n");
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries[0].author, "Thomas, Evan G.");
        assert_eq!(entries[0].url, "https://vtechworks.lib.vt.edu/handle/10919/89934");
    }

    #[test]
    fn final_entry_needs_no_trailing_separator() {
        // Seven lines exactly: the entry completes on its url line.
        let mut text = roster_text(&[entry("Adams, Jane", "2019")]);
        text.truncate(text.len() - 1);
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn trailing_partial_group_is_dropped() {
        let mut text = roster_text(&[entry("Adams, Jane", "2019")]);
        text.push_str("Bland, Emma\n2021\nAn unfinished entry\n");
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "Adams, Jane");
    }

    #[test]
    fn empty_input_yields_no_entries() {
        let entries = parse_records("".as_bytes(), None).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn field_content_is_not_validated() {
        let text = "not an author\nnot a year\n\n\n\nBSc\nnot a url\n\n";
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries[0].year, "not a year");
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].degree, "BSc");
    }

    // =========================================================================
    // Entry limit
    // =========================================================================

    #[test]
    fn entry_limit_exceeded_is_error() {
        let text = roster_text(&[entry("Adams, Jane", "2019"), entry("Bland, Emma", "2021")]);
        let err = parse_records(text.as_bytes(), Some(1)).unwrap_err();
        assert!(matches!(err, ParseError::EntryLimit(1)));
        assert!(err.to_string().contains("more than 1"));
    }

    #[test]
    fn entry_limit_exact_count_is_ok() {
        let text = roster_text(&[entry("Adams, Jane", "2019"), entry("Bland, Emma", "2021")]);
        let entries = parse_records(text.as_bytes(), Some(2)).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn no_limit_grows_past_historic_caps() {
        let many: Vec<_> = (0..600)
            .map(|i| entry(&format!("Author, {i}"), "2020"))
            .collect();
        let text = roster_text(&many);
        let entries = parse_records(text.as_bytes(), None).unwrap();
        assert_eq!(entries.len(), 600);
    }

    // =========================================================================
    // File access
    // =========================================================================

    #[test]
    fn parse_file_reads_from_disk() {
        let (_tmp, path) = write_roster(&[entry("Adams, Jane", "2019")]);
        let entries = parse_file(&path, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "Adams, Jane");
    }

    #[test]
    fn parse_file_missing_reports_path() {
        let err = parse_file(Path::new("/nonexistent/roster.txt"), None).unwrap_err();
        assert!(matches!(err, ParseError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/roster.txt"));
    }
}
