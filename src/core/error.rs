//! Error types for the fallible edges of the crate.
//!
//! Parsing and aggregation never fail. Errors come from decoding external
//! card data, metadata sources, and session edits.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors raised outside the pure core.
#[derive(Error, Debug)]
pub enum DeckError {
    /// A deck cannot be saved without a commander.
    #[error("deck '{0}' has no commander")]
    MissingCommander(String),

    /// An edit referenced a card that is not in the deck or collection.
    #[error("card not found: {0}")]
    CardNotFound(String),

    /// A card name was empty after trimming.
    #[error("card name is empty")]
    EmptyName,

    /// A quantity was rejected by the active policy.
    #[error("invalid quantity {quantity} for '{name}'")]
    InvalidQuantity { name: String, quantity: u32 },

    /// Card data from the external database could not be decoded.
    #[error("failed to decode card data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The card data is well-formed but lacks a field we need.
    #[error("card data for '{name}' is missing '{field}'")]
    MissingField { name: String, field: &'static str },

    /// A metadata source failed to answer.
    #[error("metadata source error: {0}")]
    Source(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DeckError::MissingCommander("Elves".to_string());
        assert_eq!(err.to_string(), "deck 'Elves' has no commander");

        let err = DeckError::InvalidQuantity {
            name: "Forest".to_string(),
            quantity: 0,
        };
        assert_eq!(err.to_string(), "invalid quantity 0 for 'Forest'");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DeckError = serde_err.into();
        assert!(matches!(err, DeckError::Decode(_)));
    }
}
