//! Mana curve: card counts bucketed by converted mana cost.

use serde::{Deserialize, Serialize};

use crate::core::{CardEntry, StatsConfig, UnknownCostPolicy};
use crate::metadata::MetadataLookup;

/// Number of curve buckets: 0..=6 and "7+".
pub const CURVE_BUCKETS: usize = 8;

/// One bucket of the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurveBucket {
    /// Exactly this cost (0..=6).
    Cost(u8),
    /// Cost 7 or more.
    SevenPlus,
}

impl CurveBucket {
    /// Bucket for a mana value. Fractional costs round down.
    #[must_use]
    pub fn for_cost(cost: f64) -> Self {
        if cost >= 7.0 {
            CurveBucket::SevenPlus
        } else if cost > 0.0 {
            // 0 < cost < 7, so the cast is in range
            CurveBucket::Cost(cost.floor() as u8)
        } else {
            CurveBucket::Cost(0)
        }
    }

    /// Position in the fixed bucket order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CurveBucket::Cost(c) => c as usize,
            CurveBucket::SevenPlus => 7,
        }
    }

    /// Bucket at a position (0..8).
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index >= 7 {
            CurveBucket::SevenPlus
        } else {
            CurveBucket::Cost(index as u8)
        }
    }
}

impl std::fmt::Display for CurveBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveBucket::Cost(c) => write!(f, "{}", c),
            CurveBucket::SevenPlus => f.write_str("7+"),
        }
    }
}

/// A `{bucket, count}` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub bucket: CurveBucket,
    pub count: u64,
}

/// Card quantities per cost bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCurve {
    /// Quantities for buckets 0..=6 then 7+.
    pub counts: [u64; CURVE_BUCKETS],

    /// Quantities of cards without metadata.
    ///
    /// Always 0 under `UnknownCostPolicy::AsZero`, where they land in bucket 0.
    pub unknown: u64,
}

impl ManaCurve {
    /// All eight points in fixed order, including empty buckets.
    #[must_use]
    pub fn points(&self) -> Vec<CurvePoint> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| CurvePoint {
                bucket: CurveBucket::from_index(i),
                count,
            })
            .collect()
    }

    /// Count for one bucket.
    #[must_use]
    pub fn count(&self, bucket: CurveBucket) -> u64 {
        self.counts[bucket.index().min(CURVE_BUCKETS - 1)]
    }

    /// Sum across buckets (excludes `unknown`).
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Mana curve with the default policy (unknown cards count as cost 0).
#[must_use]
pub fn mana_curve<L: MetadataLookup + ?Sized>(entries: &[CardEntry], lookup: &L) -> ManaCurve {
    mana_curve_with(entries, lookup, &StatsConfig::default())
}

/// Mana curve with an explicit configuration.
#[must_use]
pub fn mana_curve_with<L: MetadataLookup + ?Sized>(
    entries: &[CardEntry],
    lookup: &L,
    config: &StatsConfig,
) -> ManaCurve {
    let mut curve = ManaCurve::default();

    for entry in entries {
        let quantity = u64::from(entry.quantity);
        match (lookup.lookup(&entry.name), config.unknown_cost) {
            (Some(meta), _) => {
                curve.counts[CurveBucket::for_cost(meta.mana_value()).index()] += quantity;
            }
            (None, UnknownCostPolicy::AsZero) => curve.counts[0] += quantity,
            (None, UnknownCostPolicy::Separate) => curve.unknown += quantity,
        }
    }

    curve
}
