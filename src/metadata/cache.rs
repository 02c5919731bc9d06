//! Metadata cache with a staleness policy.
//!
//! The cache is the hand-off point between fetching and aggregation:
//! fetchers write into it, statistics read from it through
//! `MetadataLookup`. Stale entries stay readable until they are replaced.

use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::core::{CacheConfig, CardMetadata};

use super::lookup::MetadataLookup;
use super::source::MetadataSource;

#[derive(Clone, Debug)]
struct CachedCard {
    metadata: CardMetadata,
    fetched_at: Instant,
}

/// Outcome of a `MetadataCache::refresh` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Names that were fetched and stored.
    pub fetched: Vec<String>,
    /// Names the source does not know.
    pub not_found: Vec<String>,
    /// Names whose fetch failed.
    pub failed: Vec<String>,
}

/// Cache of card metadata keyed by card name.
///
/// ## Example
///
/// ```
/// use rust_deckbox::core::{CacheConfig, CardMetadata, TypeLine};
/// use rust_deckbox::metadata::{MetadataCache, MetadataLookup};
///
/// let mut cache = MetadataCache::new(CacheConfig::default());
/// cache.insert(CardMetadata::new("Forest", TypeLine::parse("Basic Land"), 0.0));
///
/// assert!(cache.knows("Forest"));
/// assert_eq!(cache.pending(["Forest", "Island"]), vec!["Island".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MetadataCache {
    config: CacheConfig,
    cards: FxHashMap<String, CachedCard>,
}

impl MetadataCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            cards: FxHashMap::default(),
        }
    }

    /// Cache configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn key(&self, name: &str) -> String {
        if self.config.case_insensitive {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }

    /// Store metadata under its own name, fetched now.
    pub fn insert(&mut self, metadata: CardMetadata) {
        let name = metadata.name.clone();
        self.insert_at(&name, metadata, Instant::now());
    }

    /// Store metadata under a requested name with an explicit fetch time.
    ///
    /// The requested name may differ from `metadata.name` (the database
    /// may spell it differently); lookups use the requested name.
    pub fn insert_at(&mut self, requested: &str, metadata: CardMetadata, fetched_at: Instant) {
        let key = self.key(requested);
        debug!(card = %key, "caching card metadata");
        self.cards.insert(key, CachedCard { metadata, fetched_at });
    }

    /// Remove a card. Returns its metadata if it was cached.
    pub fn remove(&mut self, name: &str) -> Option<CardMetadata> {
        let key = self.key(name);
        self.cards.remove(&key).map(|c| c.metadata)
    }

    /// Check whether an entry is stale at `now`. Missing entries are stale.
    #[must_use]
    pub fn is_stale_at(&self, name: &str, now: Instant) -> bool {
        match self.cards.get(&self.key(name)) {
            None => true,
            Some(cached) => match self.config.ttl {
                None => false,
                Some(ttl) => now.saturating_duration_since(cached.fetched_at) >= ttl,
            },
        }
    }

    /// Age of an entry at `now`.
    #[must_use]
    pub fn age_at(&self, name: &str, now: Instant) -> Option<Duration> {
        self.cards
            .get(&self.key(name))
            .map(|c| now.saturating_duration_since(c.fetched_at))
    }

    /// Names that need a fetch now: missing or stale.
    pub fn pending<I, S>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pending_at(names, Instant::now())
    }

    /// Names that need a fetch at `now`.
    ///
    /// Deduplicated by cache key; first-seen order is kept.
    pub fn pending_at<I, S>(&self, names: I, now: Instant) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        names
            .into_iter()
            .filter(|name| seen.insert(self.key(name.as_ref())))
            .filter(|name| self.is_stale_at(name.as_ref(), now))
            .map(|name| name.as_ref().to_string())
            .collect()
    }

    /// Drop every entry that is stale at `now`. Returns how many were dropped.
    pub fn evict_stale_at(&mut self, now: Instant) -> usize {
        let Some(ttl) = self.config.ttl else {
            return 0;
        };
        let before = self.cards.len();
        self.cards
            .retain(|_, c| now.saturating_duration_since(c.fetched_at) < ttl);
        let evicted = before - self.cards.len();
        if evicted > 0 {
            debug!(evicted, "evicted stale card metadata");
        }
        evicted
    }

    /// Fetch missing or stale names from a source.
    ///
    /// Failures are logged and reported, never returned as errors; the
    /// previous (stale) entry is kept when a refetch fails.
    pub fn refresh<I, S, Src>(&mut self, names: I, source: &Src) -> RefreshReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Src: MetadataSource + ?Sized,
    {
        let mut report = RefreshReport::default();

        for name in self.pending(names) {
            match source.fetch(&name) {
                Ok(Some(metadata)) => {
                    self.insert_at(&name, metadata, Instant::now());
                    report.fetched.push(name);
                }
                Ok(None) => {
                    debug!(card = %name, "card not found by metadata source");
                    report.not_found.push(name);
                }
                Err(err) => {
                    warn!(card = %name, error = %err, "failed to fetch card metadata");
                    report.failed.push(name);
                }
            }
        }

        report
    }

    /// Number of cached cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl MetadataLookup for MetadataCache {
    fn lookup(&self, name: &str) -> Option<&CardMetadata> {
        let cached = if self.config.case_insensitive {
            self.cards.get(&name.to_lowercase())
        } else {
            self.cards.get(name)
        };
        cached.map(|c| &c.metadata)
    }
}
