//! The thesis record type shared across all pipeline stages.
//!
//! A [`Thesis`] is seven owned strings, one per roster line. Fields are
//! stored exactly as read; the comparison helpers normalize on the fly and
//! never touch the stored values.

/// One thesis or dissertation entry from the roster file.
///
/// Every field is free text taken verbatim from its input line. `degree` is
/// expected to be `"MS"` or `"PhD"` but any value is accepted; `url` may be
/// empty, meaning the entry has no link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thesis {
    /// Author, expected `"Last, First"`. Only the first character matters
    /// for ordering and bucket placement.
    pub author: String,
    /// Publication year. Compared as a raw string by default — see
    /// [`crate::order::YearComparison`].
    pub year: String,
    /// Thesis or dissertation title.
    pub title: String,
    /// Advising professor.
    pub advisor: String,
    /// Granting institution.
    pub affiliation: String,
    /// Degree awarded; `"MS"` and `"PhD"` exactly are tallied in summaries.
    pub degree: String,
    /// Link target; empty string means "no link".
    pub url: String,
}

impl Thesis {
    /// Author value with the first character ASCII-uppercased, used as the
    /// comparison key. The stored field is never modified.
    ///
    /// - `"smith, Bob"` → `"Smith, Bob"`
    /// - `"de la Cruz, A."` → `"De la Cruz, A."`
    /// - `""` → `""`
    pub fn author_key(&self) -> String {
        let mut chars = self.author.chars();
        match chars.next() {
            Some(first) => std::iter::once(first.to_ascii_uppercase())
                .chain(chars)
                .collect(),
            None => String::new(),
        }
    }

    /// Uppercased first character of the author, used for alphabetical
    /// bucket placement. `None` when the author field is empty.
    pub fn author_initial(&self) -> Option<char> {
        self.author.chars().next().map(|c| c.to_ascii_uppercase())
    }

    /// Whether the entry carries a link target.
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Degree counts accumulated by exact string match.
///
/// Only `"MS"` and `"PhD"` are recognized; any other degree value renders
/// as-is but counts in neither bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DegreeTally {
    pub ms: usize,
    pub phd: usize,
}

impl DegreeTally {
    /// Tally degrees over a set of entries.
    pub fn count<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Thesis>,
    {
        let mut tally = Self::default();
        for entry in entries {
            match entry.degree.as_str() {
                "MS" => tally.ms += 1,
                "PhD" => tally.phd += 1,
                _ => {}
            }
        }
        tally
    }
}
