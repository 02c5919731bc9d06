//! Average mana value of the non-land cards in a deck.

use serde::{Deserialize, Serialize};

use crate::core::{CardEntry, StatsConfig};
use crate::metadata::MetadataLookup;

/// Average mana value, or a sentinel when the deck has no non-land cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AverageManaValue {
    /// Quantity-weighted average, rounded to 2 decimals.
    Value(f64),
    /// No non-land cards to average over.
    NoSpells,
}

impl AverageManaValue {
    /// The average, if defined.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            AverageManaValue::Value(v) => Some(v),
            AverageManaValue::NoSpells => None,
        }
    }

    /// The average, or 0.0 for decks without spells.
    #[must_use]
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl std::fmt::Display for AverageManaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AverageManaValue::Value(v) => write!(f, "{:.2}", v),
            AverageManaValue::NoSpells => f.write_str("N/A"),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average mana value with the default policy.
#[must_use]
pub fn average_mana_value<L: MetadataLookup + ?Sized>(
    entries: &[CardEntry],
    lookup: &L,
) -> AverageManaValue {
    average_mana_value_with(entries, lookup, &StatsConfig::default())
}

/// Average mana value with an explicit configuration.
///
/// Lands and cards without metadata are excluded from both the sum and the
/// count, under either `UnknownCostPolicy`.
#[must_use]
pub fn average_mana_value_with<L: MetadataLookup + ?Sized>(
    entries: &[CardEntry],
    lookup: &L,
    _config: &StatsConfig,
) -> AverageManaValue {
    let mut total_cost = 0.0;
    let mut count: u64 = 0;

    for entry in entries {
        let cost = match lookup.lookup(&entry.name) {
            Some(meta) if meta.is_land() => continue,
            Some(meta) => meta.mana_value(),
            None => continue,
        };
        total_cost += cost * f64::from(entry.quantity);
        count += u64::from(entry.quantity);
    }

    if count == 0 {
        AverageManaValue::NoSpells
    } else {
        AverageManaValue::Value(round2(total_cost / count as f64))
    }
}
