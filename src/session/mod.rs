//! Editing sessions: decks, collections, and public deck browsing.
//!
//! Sessions hold explicit state in place of ambient UI state. They
//! delegate parsing and statistics to the pure modules and never do I/O.

pub mod deck;
pub mod collection;
pub mod public;

pub use deck::{BulkAdd, Commander, DeckSession, DeckSummary};
pub use collection::{Collection, CollectionFilter};
pub use public::{search_public, unique_card_names};
