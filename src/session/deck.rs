//! Deck editing session.
//!
//! `DeckSession` is the explicit state of one deck being edited: its
//! details, commander, and card list. Cards are stored in an `im::Vector`
//! so snapshots (undo, background stat recomputation) are O(1) clones.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{total_quantity, CardEntry, DeckError, Result, SessionConfig, StatsConfig};
use crate::metadata::MetadataLookup;
use crate::parser::{parse_with_report, SkippedLine};
use crate::stats::{group_by_category, CategorySection, DeckStats};

/// The deck's commander.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commander {
    pub name: String,
    pub image_uri: Option<String>,
}

impl Commander {
    /// Create a commander without an image.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_uri: None,
        }
    }

    /// Set the image (builder pattern).
    #[must_use]
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }
}

/// Result of adding bulk text to a deck or collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkAdd {
    /// Entries appended.
    pub added: usize,
    /// Entries discarded by the zero-quantity policy.
    pub dropped: usize,
    /// Lines that did not parse.
    pub skipped: Vec<SkippedLine>,
}

/// Parse bulk text and apply the zero-quantity policy.
pub(crate) fn policy_entries(text: &str, config: &SessionConfig) -> (Vec<CardEntry>, BulkAdd) {
    let report = parse_with_report(text);
    let mut outcome = BulkAdd {
        skipped: report.skipped,
        ..BulkAdd::default()
    };

    let mut kept = Vec::with_capacity(report.entries.len());
    for entry in report.entries {
        match config.zero_quantity.apply(entry.quantity) {
            Some(q) => kept.push(entry.with_quantity(q)),
            None => {
                warn!(card = %entry.name, "dropping zero-quantity entry");
                outcome.dropped += 1;
            }
        }
    }
    outcome.added = kept.len();
    (kept, outcome)
}

/// Sum quantities per name, keeping first-seen order.
pub(crate) fn merge_by_name<'a, I>(entries: I) -> Vec<CardEntry>
where
    I: IntoIterator<Item = &'a CardEntry>,
{
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut merged: Vec<CardEntry> = Vec::new();

    for entry in entries {
        match index.get(entry.name.as_str()) {
            Some(&i) => {
                let total = merged[i].quantity.saturating_add(entry.quantity);
                merged[i] = merged[i].with_quantity(total);
            }
            None => {
                index.insert(entry.name.as_str(), merged.len());
                merged.push(entry.clone());
            }
        }
    }

    merged
}

/// One deck being edited.
///
/// ## Example
///
/// ```
/// use rust_deckbox::session::{Commander, DeckSession};
///
/// let mut deck = DeckSession::new("Elves");
/// deck.add_bulk("1 Llanowar Elves\n30 Forest");
/// deck.set_commander(Commander::new("Marwyn, the Nurturer"));
///
/// assert_eq!(deck.total_cards(), 31);
/// assert!(deck.validate_for_save().is_ok());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckSession {
    /// Backend identifier, once the deck has been saved.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    commander: Option<Commander>,
    cards: Vector<CardEntry>,
    #[serde(skip)]
    config: SessionConfig,
}

impl DeckSession {
    /// Start a new, empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rebuild a session from stored deck data.
    #[must_use]
    pub fn from_entries<I>(id: impl Into<String>, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = CardEntry>,
    {
        Self {
            id: Some(id.into()),
            name: name.into(),
            cards: entries.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Use a session configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the deck public (builder pattern).
    #[must_use]
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    // === Commander ===

    /// Current commander.
    #[must_use]
    pub fn commander(&self) -> Option<&Commander> {
        self.commander.as_ref()
    }

    /// Choose a commander, replacing any previous one.
    pub fn set_commander(&mut self, commander: Commander) {
        info!(deck = %self.name, commander = %commander.name, "commander selected");
        self.commander = Some(commander);
    }

    /// Remove the commander.
    pub fn clear_commander(&mut self) -> Option<Commander> {
        self.commander.take()
    }

    // === Cards ===

    /// Card entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &Vector<CardEntry> {
        &self.cards
    }

    /// Card entries as a `Vec`, for the statistics functions.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CardEntry> {
        self.cards.iter().cloned().collect()
    }

    /// Append parsed bulk text. Duplicates are appended, not merged.
    pub fn add_bulk(&mut self, text: &str) -> BulkAdd {
        let (entries, outcome) = policy_entries(text, &self.config);
        self.cards.extend(entries);
        info!(
            deck = %self.name,
            added = outcome.added,
            dropped = outcome.dropped,
            skipped = outcome.skipped.len(),
            "bulk cards added"
        );
        outcome
    }

    /// Append a single card.
    ///
    /// The name is trimmed and must be non-empty. A zero quantity is
    /// handled by the session's zero-quantity policy; `Drop` rejects it.
    pub fn add_card(&mut self, name: &str, quantity: u32) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }
        let quantity = self
            .config
            .zero_quantity
            .apply(quantity)
            .ok_or_else(|| DeckError::InvalidQuantity {
                name: name.to_string(),
                quantity,
            })?;
        self.cards.push_back(CardEntry::new(name, quantity));
        Ok(())
    }

    /// Remove every entry with this name. Returns the quantity removed.
    pub fn remove_card(&mut self, name: &str) -> Result<u64> {
        let removed = total_quantity(self.cards.iter().filter(|e| e.name == name));
        let before = self.cards.len();
        self.cards.retain(|e| e.name != name);
        if self.cards.len() == before {
            return Err(DeckError::CardNotFound(name.to_string()));
        }
        info!(deck = %self.name, card = name, removed, "card removed");
        Ok(removed)
    }

    /// Set a card's quantity.
    ///
    /// All entries with the name are replaced by one entry at the position
    /// of the first. A quantity of 0 removes the card.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return self.remove_card(name).map(|_| ());
        }
        let first = self
            .cards
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| DeckError::CardNotFound(name.to_string()))?;

        let replacement = CardEntry::new(name, quantity);
        let mut rebuilt = Vector::new();
        for (i, entry) in self.cards.iter().enumerate() {
            if i == first {
                rebuilt.push_back(replacement.clone());
            } else if entry.name != name {
                rebuilt.push_back(entry.clone());
            }
        }
        self.cards = rebuilt;
        Ok(())
    }

    /// Remove all cards, keeping deck details and commander.
    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    /// Total number of cards (sum of quantities).
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        total_quantity(self.cards.iter())
    }

    /// Entries with duplicate names merged, first-seen order.
    #[must_use]
    pub fn merged_entries(&self) -> Vec<CardEntry> {
        merge_by_name(self.cards.iter())
    }

    /// Distinct card names (plus the commander), for metadata prefetch.
    #[must_use]
    pub fn card_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.merged_entries().into_iter().map(|e| e.name).collect();
        if let Some(commander) = &self.commander {
            if !names.contains(&commander.name) {
                names.push(commander.name.clone());
            }
        }
        names
    }

    // === Derived views ===

    /// Deck statistics from whatever metadata is resolved.
    #[must_use]
    pub fn stats<L: MetadataLookup + ?Sized>(&self, lookup: &L, config: &StatsConfig) -> DeckStats {
        DeckStats::compute_with(&self.to_vec(), lookup, config)
    }

    /// Category sections for the deck view.
    #[must_use]
    pub fn sections<L: MetadataLookup + ?Sized>(&self, lookup: &L) -> Vec<CategorySection> {
        group_by_category(&self.to_vec(), lookup)
    }

    /// Cheap copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    // === Saving ===

    /// Check the deck can be saved. A commander is required.
    pub fn validate_for_save(&self) -> Result<()> {
        if self.commander.is_none() {
            return Err(DeckError::MissingCommander(self.name.clone()));
        }
        Ok(())
    }

    /// Listing summary.
    #[must_use]
    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            commander: self.commander.as_ref().map(|c| c.name.clone()),
            is_public: self.is_public,
            total_cards: self.total_cards(),
        }
    }
}

/// A deck as shown in a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub commander: Option<String>,
    pub is_public: bool,
    pub total_cards: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardMetadata, TypeLine, ZeroQuantityPolicy};

    #[test]
    fn test_add_bulk_appends() {
        let mut deck = DeckSession::new("Test");
        let outcome = deck.add_bulk("2x Sol Ring\n1 Forest\ngarbage");

        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(deck.total_cards(), 3);

        deck.add_bulk("1 Sol Ring");
        assert_eq!(deck.entries().len(), 3);
        assert_eq!(deck.merged_entries()[0], CardEntry::new("Sol Ring", 3));
    }

    #[test]
    fn test_zero_quantity_policies() {
        let mut dropped = DeckSession::new("A");
        let outcome = dropped.add_bulk("0 Forest\n1 Island");
        assert_eq!(outcome.dropped, 1);
        assert_eq!(dropped.to_vec(), vec![CardEntry::new("Island", 1)]);

        let mut clamped = DeckSession::new("B")
            .with_config(SessionConfig::default().with_zero_quantity(ZeroQuantityPolicy::ClampToOne));
        clamped.add_bulk("0 Forest");
        assert_eq!(clamped.to_vec(), vec![CardEntry::new("Forest", 1)]);

        let mut kept = DeckSession::new("C")
            .with_config(SessionConfig::default().with_zero_quantity(ZeroQuantityPolicy::Keep));
        kept.add_bulk("0 Forest");
        assert_eq!(kept.to_vec(), vec![CardEntry::new("Forest", 0)]);
    }

    #[test]
    fn test_add_card() {
        let mut deck = DeckSession::new("Test");
        deck.add_card("  Sol Ring ", 1).unwrap();
        assert_eq!(deck.to_vec(), vec![CardEntry::new("Sol Ring", 1)]);

        assert!(matches!(deck.add_card("   ", 1), Err(DeckError::EmptyName)));
        assert!(matches!(
            deck.add_card("Forest", 0),
            Err(DeckError::InvalidQuantity { quantity: 0, .. })
        ));
    }

    #[test]
    fn test_remove_card() {
        let mut deck = DeckSession::new("Test");
        deck.add_bulk("1 Forest\n1 Island\n2 Forest");

        assert_eq!(deck.remove_card("Forest").unwrap(), 3);
        assert_eq!(deck.to_vec(), vec![CardEntry::new("Island", 1)]);
        assert!(matches!(deck.remove_card("Forest"), Err(DeckError::CardNotFound(_))));
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut deck = DeckSession::new("Test");
        deck.add_bulk("1 Forest\n1 Island\n2 Forest");
        let before = deck.snapshot();

        deck.set_quantity("Forest", 5).unwrap();
        assert_eq!(
            deck.to_vec(),
            vec![CardEntry::new("Forest", 5), CardEntry::new("Island", 1)]
        );
        // The snapshot is unaffected.
        assert_eq!(before.total_cards(), 4);

        deck.set_quantity("Island", 0).unwrap();
        assert_eq!(deck.to_vec(), vec![CardEntry::new("Forest", 5)]);
        assert!(deck.set_quantity("Swamp", 2).is_err());
    }

    #[test]
    fn test_validate_requires_commander() {
        let mut deck = DeckSession::new("Nameless");
        let err = deck.validate_for_save().unwrap_err();
        assert_eq!(err.to_string(), "deck 'Nameless' has no commander");

        deck.set_commander(Commander::new("Atraxa, Praetors' Voice").with_image("https://img/a.jpg"));
        assert!(deck.validate_for_save().is_ok());
        assert!(deck.clear_commander().is_some());
        assert!(deck.validate_for_save().is_err());
    }

    #[test]
    fn test_card_names_include_commander() {
        let mut deck = DeckSession::new("Test");
        deck.add_bulk("1 Forest\n2 Forest\n1 Sol Ring");
        deck.set_commander(Commander::new("Omnath, Locus of Mana"));

        assert_eq!(deck.card_names(), vec!["Forest", "Sol Ring", "Omnath, Locus of Mana"]);
    }

    #[test]
    fn test_stats_and_sections() {
        let mut deck = DeckSession::new("Test");
        deck.add_bulk("1 Sol Ring\n10 Forest");
        let lookup = vec![
            CardMetadata::new("Sol Ring", TypeLine::parse("Artifact"), 1.0),
            CardMetadata::new("Forest", TypeLine::parse("Basic Land — Forest"), 0.0),
        ];

        let stats = deck.stats(&lookup, &StatsConfig::default());
        assert_eq!(stats.total_cards, 11);
        assert_eq!(stats.average.value(), Some(1.0));

        let sections = deck.sections(&lookup);
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_summary_and_clear() {
        let mut deck = DeckSession::from_entries("d1", "Elves", vec![CardEntry::new("Forest", 30)])
            .with_description("Go wide")
            .public();
        deck.set_commander(Commander::new("Lathril, Blade of the Elves"));

        let summary = deck.summary();
        assert_eq!(summary.id.as_deref(), Some("d1"));
        assert_eq!(summary.total_cards, 30);
        assert!(summary.is_public);
        assert_eq!(summary.commander.as_deref(), Some("Lathril, Blade of the Elves"));

        deck.clear_cards();
        assert_eq!(deck.total_cards(), 0);
        assert!(deck.commander().is_some());
    }
}
