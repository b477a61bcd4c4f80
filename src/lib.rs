//! # Thesis Roster
//!
//! Renders a flat text roster of theses and dissertations as an HTML
//! fragment ready for pasting into a hand-maintained publications page.
//! One tool, two listings: the same roster comes out ordered by author or
//! grouped by year, selected on the command line.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! The binary runs three independent stages over in-memory data:
//!
//! ```text
//! 1. Parse    roster file  →  Vec<Thesis>     (line groups → structured records)
//! 2. Order    Vec<Thesis>  →  Vec<Thesis>     (author-primary or year-primary)
//! 3. Render   Vec<Thesis>  →  HTML fragment   (tables, jump nav, summary)
//! ```
//!
//! Why the split:
//!
//! - **Testability**: each stage is a pure function over `Vec<Thesis>`, so
//!   tests exercise ordering and markup without touching the filesystem.
//! - **One parser**: both listings share the exact same parse, so a roster
//!   that renders in one ordering always renders in the other.
//! - **Inspection**: the `check` command reuses stage 1 on its own to print
//!   a plain-text inventory before anything touches the website.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`] | Stage 1 — reads the flat roster file, groups lines into records |
//! | [`order`] | Stage 2 — author-primary and year-primary comparators |
//! | [`render`] | Stage 3 — builds the embeddable HTML fragment with Maud |
//! | [`record`] | Shared types: the [`record::Thesis`] entry and degree tally |
//! | [`config`] | Optional `config.toml` loading and validation |
//! | [`output`] | Plain-text inventory formatting for the `check` command |
//!
//! # Design Decisions
//!
//! ## One Binary, Two Listings
//!
//! The author-ordered and year-ordered listings are a single program with a
//! listing selector, not two near-identical programs. Parsing and rendering
//! of individual entries are shared; only the comparator and the jump
//! navigation differ. A fix to either path lands in both.
//!
//! ## Verbatim Passthrough
//!
//! Field text is spliced into the fragment exactly as it appears in the
//! roster file, with no HTML escaping. The roster is maintainer-authored,
//! and entries routinely carry intentional markup (`&uuml;`, `<i>...</i>`)
//! that must reach the page intact. Maud escapes by default, so every
//! field splice goes through [`maud::PreEscaped`] deliberately.
//!
//! ## Raw-String Years
//!
//! Years sort as strings, not numbers. For the four-digit years the roster
//! actually contains the two orders agree, and the string order is what the
//! published listing has always used. Numeric comparison exists behind
//! `sorting.numeric_years` for rosters with mixed-width years; years that
//! fail to parse sort above every numeric year, in string order among
//! themselves.
//!
//! ## Fragment, Not Document
//!
//! Output is an HTML fragment between begin/end comment markers, not a full
//! document. The maintainer pastes it into an existing page between the
//! same markers, so the tool emits no `<html>`, `<head>`, or styles beyond
//! the inline table borders the page has always used.

pub mod config;
pub mod order;
pub mod output;
pub mod parse;
pub mod record;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
