//! A user's card collection.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{total_quantity, CardEntry, Category, DeckError, Result, SessionConfig};
use crate::metadata::MetadataLookup;
use crate::stats::ColorKey;

use super::deck::{merge_by_name, policy_entries, BulkAdd};

/// Filters for browsing a collection. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFilter {
    /// Set code, compared case-insensitively.
    pub set: Option<String>,
    /// Color bucket (mono color, colorless, or multi).
    pub color: Option<ColorKey>,
    /// Type category.
    pub category: Option<Category>,
}

impl CollectionFilter {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_none() && self.color.is_none() && self.category.is_none()
    }

    /// Filter by set code (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    /// Filter by color bucket (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: ColorKey) -> Self {
        self.color = Some(color);
        self
    }

    /// Filter by category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Check one entry. With any field set, unknown cards never match.
    #[must_use]
    pub fn matches<L: MetadataLookup + ?Sized>(&self, entry: &CardEntry, lookup: &L) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(meta) = lookup.lookup(&entry.name) else {
            return false;
        };

        let set_ok = self.set.as_deref().map_or(true, |wanted| {
            meta.set_code
                .as_deref()
                .is_some_and(|have| have.eq_ignore_ascii_case(wanted))
        });
        let color_ok = self
            .color
            .map_or(true, |wanted| ColorKey::classify(meta.colors) == wanted);
        let category_ok = self.category.map_or(true, |wanted| meta.is(wanted));

        set_ok && color_ok && category_ok
    }
}

/// Cards owned by a user.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Collection {
    cards: Vector<CardEntry>,
    #[serde(skip)]
    config: SessionConfig,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a session configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &Vector<CardEntry> {
        &self.cards
    }

    /// Append parsed bulk text.
    pub fn add_bulk(&mut self, text: &str) -> BulkAdd {
        let (entries, outcome) = policy_entries(text, &self.config);
        self.cards.extend(entries);
        info!(added = outcome.added, dropped = outcome.dropped, "cards added to collection");
        outcome
    }

    /// Remove every entry with this name. Returns the quantity removed.
    pub fn remove_card(&mut self, name: &str) -> Result<u64> {
        let removed = total_quantity(self.cards.iter().filter(|e| e.name == name));
        let before = self.cards.len();
        self.cards.retain(|e| e.name != name);
        if self.cards.len() == before {
            return Err(DeckError::CardNotFound(name.to_string()));
        }
        Ok(removed)
    }

    /// Total number of cards.
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        total_quantity(self.cards.iter())
    }

    /// Copies owned of one card, across all entries.
    #[must_use]
    pub fn owned(&self, name: &str) -> u64 {
        total_quantity(self.cards.iter().filter(|e| e.name == name))
    }

    /// Entries matching a filter, duplicates merged.
    #[must_use]
    pub fn filter<L: MetadataLookup + ?Sized>(
        &self,
        filter: &CollectionFilter,
        lookup: &L,
    ) -> Vec<CardEntry> {
        merge_by_name(self.cards.iter().filter(|e| filter.matches(e, lookup)))
    }

    /// Distinct card names, for metadata prefetch.
    #[must_use]
    pub fn card_names(&self) -> Vec<String> {
        merge_by_name(self.cards.iter()).into_iter().map(|e| e.name).collect()
    }
}
