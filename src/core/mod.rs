//! Core data model: entries, metadata, colors, categories, errors, configuration.
//!
//! Everything else in the crate is built on these types. None of them
//! perform I/O.

pub mod entry;
pub mod color;
pub mod category;
pub mod metadata;
pub mod config;
pub mod error;

pub use entry::{total_quantity, CardEntry};
pub use color::{Color, ColorSet};
pub use category::Category;
pub use metadata::{CardMetadata, TypeLine};
pub use config::{CacheConfig, SessionConfig, StatsConfig, UnknownCostPolicy, ZeroQuantityPolicy};
pub use error::{DeckError, Result};
