//! Line-oriented decklist parser.
//!
//! Each line is matched against `^([0-9]+)x?\s+(.+)$`: a quantity, an
//! optional `x`, at least one whitespace character, then the card name.
//! The name is trimmed; whitespace inside it is kept as written.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CardEntry;

static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)x?\s+(.+)$").expect("decklist line pattern is valid"));

/// Parse a single line.
///
/// Returns `None` for blank lines, lines without a leading quantity,
/// lines whose name is empty after trimming, and quantities that don't
/// fit in a `u32`.
///
/// ```
/// use rust_deckbox::parser::parse_line;
///
/// assert_eq!(parse_line("1x Sol Ring").unwrap().name, "Sol Ring");
/// assert!(parse_line("Sol Ring").is_none());
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<CardEntry> {
    let caps = LINE_PATTERN.captures(line)?;
    let name = caps.get(2)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    let quantity = caps.get(1)?.as_str().parse::<u32>().ok()?;
    Some(CardEntry::new(name, quantity))
}

/// Parse bulk decklist text into entries, in input order.
///
/// Duplicate names produce separate entries; merging is the caller's call.
///
/// ```
/// use rust_deckbox::parser::parse;
///
/// let entries = parse("2x Sol Ring\n1 Forest\ngarbage\n\n3x Lightning Bolt");
/// let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["Sol Ring", "Forest", "Lightning Bolt"]);
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<CardEntry> {
    text.lines().filter_map(parse_line).collect()
}

/// A non-blank line that did not produce an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line_number: usize,

    /// The line as written.
    pub text: String,
}

/// Parse result with the lines that were dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Parsed entries, in input order.
    pub entries: Vec<CardEntry>,

    /// Non-blank lines that did not parse.
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// True when every non-blank line parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse bulk text and keep track of skipped lines.
///
/// Blank (whitespace-only) lines are ignored without being reported.
/// The entries are identical to what `parse` returns.
#[must_use]
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => report.entries.push(entry),
            None => {
                debug!(line_number = index + 1, line, "skipping unparseable decklist line");
                report.skipped.push(SkippedLine {
                    line_number: index + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    report
}
