//! Type distribution and category sections.
//!
//! Categories overlap. A card counts once in every category whose token
//! is in its type line, so category totals can exceed the deck size.

use serde::{Deserialize, Serialize};

use crate::core::{total_quantity, CardEntry, Category};
use crate::metadata::MetadataLookup;

/// A `{category, count}` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub category: Category,
    pub count: u64,
}

/// Quantities per category, for all nine categories in fixed order.
#[must_use]
pub fn type_distribution<L: MetadataLookup + ?Sized>(
    entries: &[CardEntry],
    lookup: &L,
) -> Vec<TypeCount> {
    let mut counts = [0u64; Category::ALL.len()];

    for entry in entries {
        let Some(meta) = lookup.lookup(&entry.name) else {
            continue;
        };
        for (i, category) in Category::ALL.into_iter().enumerate() {
            if meta.is(category) {
                counts[i] += u64::from(entry.quantity);
            }
        }
    }

    Category::ALL
        .into_iter()
        .zip(counts)
        .map(|(category, count)| TypeCount { category, count })
        .collect()
}

/// The entries belonging to one category, as shown in a deck view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub entries: Vec<CardEntry>,
    /// Sum of the entries' quantities.
    pub total: u64,
}

impl CategorySection {
    /// Heading text, e.g. `"Creatures (12)"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} ({})", self.category.plural(), self.total)
    }
}

/// Group entries into category sections.
///
/// Sections come in fixed category order; categories with no entries are
/// omitted. An entry can appear in several sections. Unknown cards appear
/// in none.
#[must_use]
pub fn group_by_category<L: MetadataLookup + ?Sized>(
    entries: &[CardEntry],
    lookup: &L,
) -> Vec<CategorySection> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<CardEntry> = entries
                .iter()
                .filter(|e| lookup.lookup(&e.name).is_some_and(|m| m.is(category)))
                .cloned()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(CategorySection {
                    category,
                    total: total_quantity(&members),
                    entries: members,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardMetadata, TypeLine};
    use crate::metadata::NoMetadata;

    fn lookup() -> Vec<CardMetadata> {
        vec![
            CardMetadata::new("Solemn Simulacrum", TypeLine::parse("Artifact Creature — Golem"), 4.0),
            CardMetadata::new("Forest", TypeLine::parse("Basic Land — Forest"), 0.0),
            CardMetadata::new("Bitterblossom", TypeLine::parse("Kindred Enchantment — Faerie"), 2.0),
            CardMetadata::new("Brainstorm", TypeLine::parse("Instant"), 1.0),
        ]
    }

    fn count_of(dist: &[TypeCount], category: Category) -> u64 {
        dist.iter()
            .find(|t| t.category == category)
            .map_or(0, |t| t.count)
    }

    #[test]
    fn test_all_nine_categories_reported() {
        let dist = type_distribution(&[], &NoMetadata);
        assert_eq!(dist.len(), 9);
        assert_eq!(dist[0].category, Category::Creature);
        assert_eq!(dist[8].category, Category::Kindred);
    }

    #[test]
    fn test_overlap_preserved() {
        let entries = vec![
            CardEntry::new("Solemn Simulacrum", 2),
            CardEntry::new("Forest", 10),
            CardEntry::new("Bitterblossom", 1),
        ];
        let dist = type_distribution(&entries, &lookup());

        assert_eq!(count_of(&dist, Category::Artifact), 2);
        assert_eq!(count_of(&dist, Category::Creature), 2);
        assert_eq!(count_of(&dist, Category::Land), 10);
        assert_eq!(count_of(&dist, Category::Kindred), 1);
        assert_eq!(count_of(&dist, Category::Enchantment), 1);

        let sum: u64 = dist.iter().map(|t| t.count).sum();
        assert_eq!(sum, 16);
        assert!(sum > total_quantity(&entries));
    }

    #[test]
    fn test_unknown_cards_ignored() {
        let entries = vec![CardEntry::new("Mystery", 4)];
        let dist = type_distribution(&entries, &lookup());
        assert!(dist.iter().all(|t| t.count == 0));
    }

    #[test]
    fn test_group_by_category() {
        let entries = vec![
            CardEntry::new("Brainstorm", 1),
            CardEntry::new("Solemn Simulacrum", 1),
            CardEntry::new("Forest", 30),
            CardEntry::new("Mystery", 1),
        ];
        let sections = group_by_category(&entries, &lookup());
        let categories: Vec<_> = sections.iter().map(|s| s.category).collect();

        assert_eq!(
            categories,
            vec![Category::Creature, Category::Instant, Category::Artifact, Category::Land]
        );
        assert_eq!(sections[3].total, 30);
        assert_eq!(sections[3].heading(), "Lands (30)");
        assert_eq!(sections[0].entries, vec![CardEntry::new("Solemn Simulacrum", 1)]);
    }
}
