//! # rust-deckbox
//!
//! Decklist parsing and deck statistics for trading card game deck builders.
//!
//! ## Design Principles
//!
//! 1. **Total Parsing**: Bulk text never fails to parse. Lines that don't
//!    look like `"2x Sol Ring"` are skipped.
//!
//! 2. **Pure Statistics**: Mana curve, average mana value, and color/type
//!    distributions are pure functions of the card entries and whatever
//!    metadata has been resolved so far. Missing metadata is "unknown",
//!    never an error.
//!
//! 3. **Explicit State**: Fetching metadata and computing statistics are
//!    decoupled through `MetadataCache`. Deck editing state lives in a
//!    `DeckSession` value, not in globals.
//!
//! ## Modules
//!
//! - `core`: Card entries, metadata, colors, categories, errors, configuration
//! - `parser`: Bulk decklist text parser
//! - `stats`: Deck statistics aggregation
//! - `metadata`: Lookup trait, cache, sources, Scryfall decoding
//! - `session`: Deck editing sessions, collections, public deck search

pub mod core;
pub mod parser;
pub mod stats;
pub mod metadata;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardEntry, CardMetadata, Category, Color, ColorSet, TypeLine,
    CacheConfig, SessionConfig, StatsConfig, UnknownCostPolicy, ZeroQuantityPolicy,
    DeckError, Result,
};

pub use crate::parser::{parse, parse_with_report, ParseReport, SkippedLine};

pub use crate::stats::{
    mana_curve, average_mana_value, color_distribution, type_distribution, group_by_category,
    ManaCurve, CurveBucket, CurvePoint, AverageManaValue, ColorKey, ColorCount, TypeCount,
    CategorySection, DeckStats,
};

pub use crate::metadata::{MetadataCache, MetadataLookup, MetadataSource, NoMetadata};

pub use crate::session::{Collection, CollectionFilter, Commander, DeckSession, DeckSummary};
