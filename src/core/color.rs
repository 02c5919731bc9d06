//! Colors and color sets.
//!
//! Five colors, written with their usual one-letter symbols:
//! W (white), U (blue), B (black), R (red), G (green).

use serde::{Deserialize, Serialize};

/// One of the five colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// All colors in WUBRG order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Parse a color symbol ("W", "U", "B", "R", "G").
    ///
    /// Lowercase symbols are accepted. Anything else returns `None`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "W" | "w" => Some(Color::White),
            "U" | "u" => Some(Color::Blue),
            "B" | "b" => Some(Color::Black),
            "R" | "r" => Some(Color::Red),
            "G" | "g" => Some(Color::Green),
            _ => None,
        }
    }

    /// The one-letter symbol for this color.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A set of colors, stored as a bitmask.
///
/// Serializes as a list of symbols, e.g. `["U","R"]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty (colorless) set.
    #[must_use]
    pub const fn colorless() -> Self {
        Self(0)
    }

    /// Build a set from color symbols, ignoring unknown symbols.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symbols
            .into_iter()
            .filter_map(|s| Color::from_symbol(s.as_ref()))
            .collect()
    }

    /// Add a color (builder pattern).
    #[must_use]
    pub const fn with(self, color: Color) -> Self {
        Self(self.0 | color.bit())
    }

    /// Add a color in place.
    pub fn insert(&mut self, color: Color) {
        self.0 |= color.bit();
    }

    /// Check whether the set contains a color.
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Number of colors in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True for colorless.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single color, if the set has exactly one.
    #[must_use]
    pub fn single(self) -> Option<Color> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterate colors in WUBRG order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        let mut set = ColorSet::colorless();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl From<Vec<Color>> for ColorSet {
    fn from(colors: Vec<Color>) -> Self {
        colors.into_iter().collect()
    }
}

impl From<ColorSet> for Vec<Color> {
    fn from(set: ColorSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Color::from_symbol("U"), Some(Color::Blue));
        assert_eq!(Color::from_symbol("g"), Some(Color::Green));
        assert_eq!(Color::from_symbol("C"), None);
        assert_eq!(Color::from_symbol(""), None);
    }

    #[test]
    fn test_color_set_basics() {
        let set = ColorSet::colorless().with(Color::Red).with(Color::Blue);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Color::Red));
        assert!(!set.contains(Color::Green));
        assert_eq!(set.single(), None);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_color_set_duplicates_collapse() {
        let set = ColorSet::from_symbols(["G", "G", "X"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.single(), Some(Color::Green));
    }

    #[test]
    fn test_colorless() {
        let set = ColorSet::default();
        assert!(set.is_empty());
        assert_eq!(set.single(), None);
    }

    #[test]
    fn test_color_set_serialization() {
        let set = ColorSet::from_symbols(["R", "W"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["W","R"]"#);

        let back: ColorSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
