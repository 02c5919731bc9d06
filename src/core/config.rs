//! Configuration for statistics, sessions, and the metadata cache.
//!
//! Every policy the deck tools have to decide on lives here, with a
//! default that reproduces the deck builder's historical behavior.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How cards without metadata enter the mana curve.
///
/// The average always leaves them out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownCostPolicy {
    /// Unknown cards count as cost 0 in the curve.
    #[default]
    AsZero,
    /// Unknown cards get their own curve count.
    Separate,
}

/// What a session does with entries whose quantity is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroQuantityPolicy {
    /// Discard the entry.
    #[default]
    Drop,
    /// Raise the quantity to 1.
    ClampToOne,
    /// Keep the entry as written.
    Keep,
}

impl ZeroQuantityPolicy {
    /// Apply the policy to a quantity. `None` means drop.
    #[must_use]
    pub fn apply(self, quantity: u32) -> Option<u32> {
        match (self, quantity) {
            (_, q) if q > 0 => Some(q),
            (ZeroQuantityPolicy::Drop, _) => None,
            (ZeroQuantityPolicy::ClampToOne, _) => Some(1),
            (ZeroQuantityPolicy::Keep, q) => Some(q),
        }
    }
}

/// Statistics configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Treatment of cards whose metadata has not been resolved.
    pub unknown_cost: UnknownCostPolicy,
}

impl StatsConfig {
    /// Set the unknown-cost policy.
    #[must_use]
    pub fn with_unknown_cost(mut self, policy: UnknownCostPolicy) -> Self {
        self.unknown_cost = policy;
        self
    }
}

/// Deck and collection session configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Treatment of zero-quantity entries from bulk input.
    pub zero_quantity: ZeroQuantityPolicy,
}

impl SessionConfig {
    /// Set the zero-quantity policy.
    #[must_use]
    pub fn with_zero_quantity(mut self, policy: ZeroQuantityPolicy) -> Self {
        self.zero_quantity = policy;
        self
    }
}

/// Metadata cache configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Entries older than this are stale and get refetched.
    /// `None` keeps entries forever.
    pub ttl: Option<Duration>,

    /// Fold names to lowercase before keying.
    pub case_insensitive: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Some(Duration::from_secs(24 * 60 * 60)),
            case_insensitive: false,
        }
    }
}

impl CacheConfig {
    /// Set the time-to-live.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Never expire entries.
    #[must_use]
    pub fn without_ttl(mut self) -> Self {
        self.ttl = None;
        self
    }

    /// Key names case-insensitively.
    #[must_use]
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }
}
