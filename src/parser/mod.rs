//! Decklist text parsing.
//!
//! Turns pasted bulk text ("2x Sol Ring", "1 Forest", ...) into
//! `CardEntry` values. Parsing is total: any input produces a (possibly
//! empty) list, and lines that don't match are skipped.

pub mod decklist;

pub use decklist::{parse, parse_line, parse_with_report, ParseReport, SkippedLine};
