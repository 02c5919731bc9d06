//! Card entries - one line of a decklist.
//!
//! A `CardEntry` pairs a card name with a quantity. Entries are immutable
//! values: changing a quantity replaces the entry rather than mutating it.

use serde::{Deserialize, Serialize};

/// A card name and how many copies of it.
///
/// The parser produces these from bulk text. Names are trimmed and
/// non-empty; the quantity is taken as written, so a `0` quantity can
/// appear here and is left to the caller's policy.
///
/// ## Example
///
/// ```
/// use rust_deckbox::core::CardEntry;
///
/// let ring = CardEntry::new("Sol Ring", 2);
/// assert_eq!(ring.name, "Sol Ring");
/// assert_eq!(ring.with_quantity(3).quantity, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    /// Exact card name as written (trimmed).
    pub name: String,

    /// Number of copies.
    pub quantity: u32,
}

impl CardEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Return a copy of this entry with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            name: self.name.clone(),
            quantity,
        }
    }
}

impl std::fmt::Display for CardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x {}", self.quantity, self.name)
    }
}

/// Sum the quantities of a slice of entries.
///
/// This is the deck's displayed "total card count".
#[must_use]
pub fn total_quantity<'a, I>(entries: I) -> u64
where
    I: IntoIterator<Item = &'a CardEntry>,
{
    entries.into_iter().map(|e| u64::from(e.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = CardEntry::new("Lightning Bolt", 4);
        assert_eq!(format!("{}", entry), "4x Lightning Bolt");
    }

    #[test]
    fn test_with_quantity_replaces() {
        let entry = CardEntry::new("Forest", 10);
        let fewer = entry.with_quantity(8);

        assert_eq!(entry.quantity, 10);
        assert_eq!(fewer.quantity, 8);
        assert_eq!(fewer.name, "Forest");
    }

    #[test]
    fn test_total_quantity() {
        let entries = vec![
            CardEntry::new("Sol Ring", 1),
            CardEntry::new("Forest", 35),
            CardEntry::new("Island", 0),
        ];
        assert_eq!(total_quantity(&entries), 36);
        assert_eq!(total_quantity(&Vec::<CardEntry>::new()), 0);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = CardEntry::new("Sol Ring", 1);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Sol Ring","quantity":1}"#);

        let back: CardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
