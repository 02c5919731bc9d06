//! Card type categories used for deck grouping.

use serde::{Deserialize, Serialize};

/// Fixed set of card type categories.
///
/// A card belongs to every category whose token appears in its type line,
/// so categories overlap: an "Artifact Creature" is in both `Artifact` and
/// `Creature`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Creature,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Planeswalker,
    Battle,
    Land,
    Kindred,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 9] = [
        Category::Creature,
        Category::Instant,
        Category::Sorcery,
        Category::Artifact,
        Category::Enchantment,
        Category::Planeswalker,
        Category::Battle,
        Category::Land,
        Category::Kindred,
    ];

    /// The type-line token that marks membership.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Category::Creature => "Creature",
            Category::Instant => "Instant",
            Category::Sorcery => "Sorcery",
            Category::Artifact => "Artifact",
            Category::Enchantment => "Enchantment",
            Category::Planeswalker => "Planeswalker",
            Category::Battle => "Battle",
            Category::Land => "Land",
            Category::Kindred => "Kindred",
        }
    }

    /// Plural heading for section display ("Creatures", "Sorceries", ...).
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Category::Creature => "Creatures",
            Category::Instant => "Instants",
            Category::Sorcery => "Sorceries",
            Category::Artifact => "Artifacts",
            Category::Enchantment => "Enchantments",
            Category::Planeswalker => "Planeswalkers",
            Category::Battle => "Battles",
            Category::Land => "Lands",
            Category::Kindred => "Kindred",
        }
    }

    /// Look up a category by its token. Exact, case-sensitive match.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
