//! Deck statistics: mana curve, average mana value, color and type
//! distributions.
//!
//! All functions are pure and synchronous. They take the deck's entries
//! and a `MetadataLookup` holding whatever metadata has been resolved so
//! far; missing metadata never causes a failure.

pub mod curve;
pub mod average;
pub mod colors;
pub mod types;
pub mod summary;

pub use curve::{mana_curve, mana_curve_with, CurveBucket, CurvePoint, ManaCurve, CURVE_BUCKETS};
pub use average::{average_mana_value, average_mana_value_with, AverageManaValue};
pub use colors::{color_distribution, ColorCount, ColorKey};
pub use types::{group_by_category, type_distribution, CategorySection, TypeCount};
pub use summary::DeckStats;
