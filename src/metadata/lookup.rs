//! Read-only metadata lookup.
//!
//! The statistics functions take any `MetadataLookup`. A miss is not an
//! error: it means the card has not been resolved (yet).

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::core::CardMetadata;

/// Synchronous, read-only access to resolved card metadata.
///
/// Implemented for hash maps keyed by card name (including `FxHashMap`),
/// slices of metadata, references, and `MetadataCache`.
pub trait MetadataLookup {
    /// Metadata for a card name, if it has been resolved.
    fn lookup(&self, name: &str) -> Option<&CardMetadata>;

    /// Check whether a card name has been resolved.
    fn knows(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl<S: BuildHasher> MetadataLookup for HashMap<String, CardMetadata, S> {
    fn lookup(&self, name: &str) -> Option<&CardMetadata> {
        self.get(name)
    }
}

impl MetadataLookup for [CardMetadata] {
    fn lookup(&self, name: &str) -> Option<&CardMetadata> {
        self.iter().find(|m| m.name == name)
    }
}

impl MetadataLookup for Vec<CardMetadata> {
    fn lookup(&self, name: &str) -> Option<&CardMetadata> {
        self.as_slice().lookup(name)
    }
}

impl<T: MetadataLookup + ?Sized> MetadataLookup for &T {
    fn lookup(&self, name: &str) -> Option<&CardMetadata> {
        (**self).lookup(name)
    }
}

/// A lookup that knows nothing. Every card is unknown.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMetadata;

impl MetadataLookup for NoMetadata {
    fn lookup(&self, _name: &str) -> Option<&CardMetadata> {
        None
    }
}
