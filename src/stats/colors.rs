//! Color distribution: mono-colored, colorless, and multicolored counts.

use serde::{Deserialize, Serialize};

use crate::core::{CardEntry, Color, ColorSet};
use crate::metadata::MetadataLookup;

/// Color bucket for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColorKey {
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
    Colorless,
    Multi,
}

impl ColorKey {
    /// All buckets in output order.
    pub const ALL: [ColorKey; 7] = [
        ColorKey::White,
        ColorKey::Blue,
        ColorKey::Black,
        ColorKey::Red,
        ColorKey::Green,
        ColorKey::Colorless,
        ColorKey::Multi,
    ];

    /// Classify a color set: none is colorless, one is that color, more is multi.
    #[must_use]
    pub fn classify(colors: ColorSet) -> Self {
        match colors.len() {
            0 => ColorKey::Colorless,
            1 => colors.single().map_or(ColorKey::Colorless, ColorKey::from),
            _ => ColorKey::Multi,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl From<Color> for ColorKey {
    fn from(color: Color) -> Self {
        match color {
            Color::White => ColorKey::White,
            Color::Blue => ColorKey::Blue,
            Color::Black => ColorKey::Black,
            Color::Red => ColorKey::Red,
            Color::Green => ColorKey::Green,
        }
    }
}

impl std::fmt::Display for ColorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorKey::White => f.write_str("W"),
            ColorKey::Blue => f.write_str("U"),
            ColorKey::Black => f.write_str("B"),
            ColorKey::Red => f.write_str("R"),
            ColorKey::Green => f.write_str("G"),
            ColorKey::Colorless => f.write_str("Colorless"),
            ColorKey::Multi => f.write_str("Multi"),
        }
    }
}

/// A `{colorKey, count}` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub color: ColorKey,
    pub count: u64,
}

/// Quantities per color bucket.
///
/// Only buckets with a non-zero count are returned, in WUBRG order
/// followed by Colorless and Multi. Cards without metadata are skipped.
#[must_use]
pub fn color_distribution<L: MetadataLookup + ?Sized>(
    entries: &[CardEntry],
    lookup: &L,
) -> Vec<ColorCount> {
    let mut counts = [0u64; ColorKey::ALL.len()];

    for entry in entries {
        if let Some(meta) = lookup.lookup(&entry.name) {
            counts[ColorKey::classify(meta.colors).index()] += u64::from(entry.quantity);
        }
    }

    ColorKey::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(color, count)| ColorCount { color, count })
        .collect()
}
