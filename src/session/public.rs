//! Browsing decks shared by other users.

use rustc_hash::FxHashSet;

use super::deck::{DeckSession, DeckSummary};

/// Public decks whose name or description contains `term`, ignoring case.
///
/// An empty term matches every public deck. Private decks never match.
#[must_use]
pub fn search_public<'a>(decks: &'a [DeckSummary], term: &str) -> Vec<&'a DeckSummary> {
    let term = term.to_lowercase();
    decks
        .iter()
        .filter(|d| d.is_public)
        .filter(|d| {
            d.name.to_lowercase().contains(&term) || d.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// Distinct card names across several decks, in first-seen order.
///
/// Used to fetch metadata once per card when showing many decks.
#[must_use]
pub fn unique_card_names<'a, I>(decks: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a DeckSession>,
{
    let mut seen = FxHashSet::default();
    let mut names = Vec::new();
    for deck in decks {
        for name in deck.card_names() {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }
    names
}
