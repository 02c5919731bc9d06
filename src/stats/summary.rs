//! All deck statistics in one pass over the inputs.

use serde::{Deserialize, Serialize};

use crate::core::{total_quantity, CardEntry, StatsConfig};
use crate::metadata::MetadataLookup;

use super::average::{average_mana_value_with, AverageManaValue};
use super::colors::{color_distribution, ColorCount};
use super::curve::{mana_curve_with, ManaCurve};
use super::types::{type_distribution, TypeCount};

/// Derived statistics for a deck.
///
/// Pure function of the entries and whatever metadata is resolved at the
/// time of the call. Recompute after more metadata arrives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Sum of all quantities.
    pub total_cards: u64,

    /// Sum of quantities whose metadata is resolved.
    pub resolved_cards: u64,

    pub curve: ManaCurve,
    pub average: AverageManaValue,
    pub colors: Vec<ColorCount>,
    pub types: Vec<TypeCount>,
}

impl DeckStats {
    /// Compute with the default configuration.
    #[must_use]
    pub fn compute<L: MetadataLookup + ?Sized>(entries: &[CardEntry], lookup: &L) -> Self {
        Self::compute_with(entries, lookup, &StatsConfig::default())
    }

    /// Compute with an explicit configuration.
    #[must_use]
    pub fn compute_with<L: MetadataLookup + ?Sized>(
        entries: &[CardEntry],
        lookup: &L,
        config: &StatsConfig,
    ) -> Self {
        let resolved_cards = entries
            .iter()
            .filter(|e| lookup.knows(&e.name))
            .map(|e| u64::from(e.quantity))
            .sum();

        Self {
            total_cards: total_quantity(entries),
            resolved_cards,
            curve: mana_curve_with(entries, lookup, config),
            average: average_mana_value_with(entries, lookup, config),
            colors: color_distribution(entries, lookup),
            types: type_distribution(entries, lookup),
        }
    }

    /// True when every card has metadata.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.resolved_cards == self.total_cards
    }
}
