//! Metadata sources: whatever can answer "what is this card?".
//!
//! Sources are the external collaborator. The crate ships none that touch
//! the network; an HTTP client plugs in by implementing `MetadataSource`.

use crate::core::{CardMetadata, Result};

/// Something that can resolve a card name to metadata.
///
/// `Ok(None)` means the card does not exist; `Err` means the source
/// could not answer (and a later retry may succeed).
pub trait MetadataSource {
    /// Resolve one card name.
    fn fetch(&self, name: &str) -> Result<Option<CardMetadata>>;
}

impl<F> MetadataSource for F
where
    F: Fn(&str) -> Result<Option<CardMetadata>>,
{
    fn fetch(&self, name: &str) -> Result<Option<CardMetadata>> {
        self(name)
    }
}
