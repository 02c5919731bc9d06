//! Card metadata supplied by an external card database.
//!
//! The core never fetches metadata itself. It reads whatever has been
//! resolved so far through a lookup (see `crate::metadata`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;
use super::color::ColorSet;

/// Type-line tokens, e.g. `["Legendary", "Artifact", "Creature"]`.
///
/// SmallVec optimizes for the usual 1-4 supertypes/types without heap
/// allocation. Subtypes (after the dash) are not included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeLine(pub SmallVec<[String; 4]>);

impl TypeLine {
    /// Build a type line from tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Parse a printed type line such as `"Legendary Creature — Elf Druid"`.
    ///
    /// Only the part before the em-dash is kept; it is split on whitespace.
    #[must_use]
    pub fn parse(printed: &str) -> Self {
        let types = printed.split('—').next().unwrap_or_default();
        Self::new(types.split_whitespace())
    }

    /// Check whether a token appears in the type line.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Check category membership.
    #[must_use]
    pub fn is(&self, category: Category) -> bool {
        self.contains(category.token())
    }

    /// Categories this type line belongs to, in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| self.is(*c))
    }

    /// Iterate over tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when no tokens are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TypeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Resolved metadata for one card name.
///
/// `name`, `type_line`, `converted_mana_cost` and `colors` drive the deck
/// statistics. The optional display fields are carried for deck views.
///
/// ## Example
///
/// ```
/// use rust_deckbox::core::{CardMetadata, Category, ColorSet, TypeLine};
///
/// let bolt = CardMetadata::new("Lightning Bolt", TypeLine::parse("Instant"), 1.0)
///     .with_colors(ColorSet::from_symbols(["R"]));
///
/// assert!(bolt.is(Category::Instant));
/// assert!(!bolt.is_land());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMetadata {
    /// Card name as the database spells it.
    pub name: String,

    /// Type tokens before the dash.
    pub type_line: TypeLine,

    /// Converted mana cost (mana value). Non-negative; may be fractional.
    pub converted_mana_cost: f64,

    /// Card colors.
    pub colors: ColorSet,

    /// Printed mana cost, e.g. `"{2}{U}{U}"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,

    /// Rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,

    /// Card image (normal size).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,

    /// Set code of the printing, e.g. `"lea"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_code: Option<String>,

    /// Power, for creatures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,

    /// Toughness, for creatures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
}

impl CardMetadata {
    /// Create metadata with the fields the statistics need.
    #[must_use]
    pub fn new(name: impl Into<String>, type_line: TypeLine, converted_mana_cost: f64) -> Self {
        Self {
            name: name.into(),
            type_line,
            converted_mana_cost,
            ..Self::default()
        }
    }

    /// Set colors (builder pattern).
    #[must_use]
    pub fn with_colors(mut self, colors: ColorSet) -> Self {
        self.colors = colors;
        self
    }

    /// Set the image URI (builder pattern).
    #[must_use]
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Set the set code (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set_code: impl Into<String>) -> Self {
        self.set_code = Some(set_code.into());
        self
    }

    /// Check category membership.
    #[must_use]
    pub fn is(&self, category: Category) -> bool {
        self.type_line.is(category)
    }

    /// True if the type line contains "Land".
    #[must_use]
    pub fn is_land(&self) -> bool {
        self.is(Category::Land)
    }

    /// Mana value sanitized for arithmetic: negative or non-finite becomes 0.
    #[must_use]
    pub fn mana_value(&self) -> f64 {
        if !self.converted_mana_cost.is_finite() || self.converted_mana_cost < 0.0 {
            0.0
        } else {
            self.converted_mana_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn test_type_line_parse_drops_subtypes() {
        let line = TypeLine::parse("Legendary Artifact Creature — Golem");
        assert_eq!(line.tokens().collect::<Vec<_>>(), vec!["Legendary", "Artifact", "Creature"]);
    }

    #[test]
    fn test_type_line_parse_without_dash() {
        let line = TypeLine::parse("  Basic Land  ");
        assert_eq!(line.to_string(), "Basic Land");
        assert!(line.is(Category::Land));
    }

    #[test]
    fn test_type_line_parse_empty() {
        assert!(TypeLine::parse("").is_empty());
        assert!(TypeLine::parse("— Elf").is_empty());
    }

    #[test]
    fn test_categories_overlap() {
        let line = TypeLine::parse("Artifact Creature — Construct");
        let categories: Vec<_> = line.categories().collect();
        assert_eq!(categories, vec![Category::Creature, Category::Artifact]);
    }

    #[test]
    fn test_token_match_is_exact() {
        // Prefix matches do not count.
        let line = TypeLine::new(["Landscape"]);
        assert!(!line.is(Category::Land));
    }

    #[test]
    fn test_metadata_builder() {
        let card = CardMetadata::new("Counterspell", TypeLine::parse("Instant"), 2.0)
            .with_colors(ColorSet::colorless().with(Color::Blue))
            .with_set("lea")
            .with_image("https://img.example/counterspell.jpg");

        assert_eq!(card.colors.single(), Some(Color::Blue));
        assert_eq!(card.set_code.as_deref(), Some("lea"));
        assert!(card.image_uri.is_some());
        assert!(!card.is_land());
    }

    #[test]
    fn test_mana_value_sanitized() {
        let mut card = CardMetadata::new("Odd", TypeLine::default(), -1.0);
        assert_eq!(card.mana_value(), 0.0);
        card.converted_mana_cost = f64::NAN;
        assert_eq!(card.mana_value(), 0.0);
        card.converted_mana_cost = f64::INFINITY;
        assert_eq!(card.mana_value(), 0.0);
        card.converted_mana_cost = f64::NEG_INFINITY;
        assert_eq!(card.mana_value(), 0.0);
        card.converted_mana_cost = 0.5;
        assert_eq!(card.mana_value(), 0.5);
    }

    #[test]
    fn test_metadata_serialization_skips_empty_fields() {
        let card = CardMetadata::new("Forest", TypeLine::parse("Basic Land — Forest"), 0.0);
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("oracle_text"));

        let back: CardMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
