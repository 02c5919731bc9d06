//! Card metadata access.
//!
//! - `MetadataLookup`: synchronous reads used by the statistics
//! - `MetadataSource`: resolves names, e.g. from an HTTP client or bulk file
//! - `MetadataCache`: name-keyed cache with staleness, filled from a source
//! - `scryfall`: decoding of Scryfall card objects and search queries
//!
//! Fetching and aggregation are decoupled: sources write into the cache
//! whenever they finish, and statistics can be recomputed from the cache
//! at any time.

pub mod lookup;
pub mod source;
pub mod cache;
pub mod scryfall;

pub use lookup::{MetadataLookup, NoMetadata};
pub use source::MetadataSource;
pub use cache::{MetadataCache, RefreshReport};
pub use scryfall::{
    parse_named_response, parse_search_results, search_query, ScryfallBulk, ScryfallCard,
    SearchKind, SearchResult, MIN_SEARCH_LEN,
};
