//! Decoding card objects from the Scryfall card database.
//!
//! Covers the `/cards/named` response, `/cards/search` result lists, and
//! bulk-data files (a JSON array of card objects). No HTTP here; callers
//! hand in response bodies.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::core::{CardMetadata, ColorSet, DeckError, Result, TypeLine};

use super::lookup::MetadataLookup;
use super::source::MetadataSource;

/// Shortest input that triggers a search.
pub const MIN_SEARCH_LEN: usize = 3;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
}

/// One face of a multi-faced card.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CardFace {
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
    pub colors: Option<Vec<String>>,
    pub image_uris: Option<ImageUris>,
    pub power: Option<String>,
    pub toughness: Option<String>,
}

/// A Scryfall card object (the fields we use).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScryfallCard {
    pub name: String,
    pub type_line: Option<String>,
    pub cmc: Option<f64>,
    pub colors: Option<Vec<String>>,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Vec<CardFace>,
    pub set: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
}

impl ScryfallCard {
    /// Decode a single card object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn front(&self) -> Option<&CardFace> {
        self.card_faces.first()
    }

    /// Normal-size image, falling back to the front face.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image_uris
            .as_ref()
            .and_then(|u| u.normal.as_deref())
            .or_else(|| {
                self.front()
                    .and_then(|f| f.image_uris.as_ref())
                    .and_then(|u| u.normal.as_deref())
            })
    }

    /// Convert to `CardMetadata`.
    ///
    /// The type line keeps only the words before the first em-dash. Colors
    /// and text fall back to the front face for double-faced cards. A card
    /// with no type line anywhere is rejected.
    pub fn into_metadata(self) -> Result<CardMetadata> {
        let front = self.front().cloned().unwrap_or_default();

        let printed = self
            .type_line
            .as_deref()
            .or(front.type_line.as_deref())
            .ok_or_else(|| DeckError::MissingField {
                name: self.name.clone(),
                field: "type_line",
            })?;
        let type_line = TypeLine::parse(printed);
        let image_uri = self.image().map(str::to_string);

        let colors = self
            .colors
            .or(front.colors)
            .map(ColorSet::from_symbols)
            .unwrap_or_default();

        Ok(CardMetadata {
            name: self.name,
            type_line,
            converted_mana_cost: self.cmc.unwrap_or(0.0),
            colors,
            mana_cost: self.mana_cost.or(front.mana_cost),
            oracle_text: self.oracle_text.or(front.oracle_text),
            image_uri,
            set_code: self.set,
            power: self.power.or(front.power),
            toughness: self.toughness.or(front.toughness),
        })
    }
}

/// Scryfall's error object.
#[derive(Clone, Debug, Default, Deserialize)]
struct ScryfallError {
    code: Option<String>,
    details: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    object: String,
}

/// Decode a `/cards/named?exact=` response body.
///
/// A `not_found` error object becomes `Ok(None)`; other error objects
/// become `DeckError::Source`.
pub fn parse_named_response(json: &str) -> Result<Option<CardMetadata>> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if envelope.object == "error" {
        let error: ScryfallError = serde_json::from_str(json)?;
        return match error.code.as_deref() {
            Some("not_found") => Ok(None),
            _ => Err(DeckError::Source(
                error.details.unwrap_or_else(|| "unknown Scryfall error".to_string()),
            )),
        };
    }
    ScryfallCard::from_json(json)?.into_metadata().map(Some)
}

/// What a search is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    /// Any card.
    Card,
    /// Legendary creatures only.
    Commander,
}

/// Build a Scryfall search query for typed input.
///
/// Returns `None` when the input is shorter than `MIN_SEARCH_LEN`
/// characters. The query is not URL-encoded.
///
/// ```
/// use rust_deckbox::metadata::{search_query, SearchKind};
///
/// assert_eq!(search_query("Sol", SearchKind::Card).as_deref(), Some("\"Sol\""));
/// assert_eq!(search_query("So", SearchKind::Card), None);
/// ```
#[must_use]
pub fn search_query(input: &str, kind: SearchKind) -> Option<String> {
    if input.chars().count() < MIN_SEARCH_LEN {
        return None;
    }
    Some(match kind {
        SearchKind::Card => format!("\"{}\"", input),
        SearchKind::Commander => format!("\"{}\" (t:legendary t:creature)", input),
    })
}

/// A search hit with an image to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub image_uri: String,
}

#[derive(Deserialize)]
struct SearchList {
    #[serde(default)]
    data: Vec<ScryfallCard>,
}

/// Decode a `/cards/search` response into results.
///
/// Cards without any image are dropped. A body without `data` yields an
/// empty list.
pub fn parse_search_results(json: &str) -> Result<Vec<SearchResult>> {
    let list: SearchList = serde_json::from_str(json)?;
    Ok(list
        .data
        .iter()
        .filter_map(|card| {
            card.image().map(|uri| SearchResult {
                name: card.name.clone(),
                image_uri: uri.to_string(),
            })
        })
        .collect())
}

/// Metadata loaded from a Scryfall bulk-data file.
///
/// Usable directly as a lookup, or as a source for `MetadataCache`.
#[derive(Clone, Debug, Default)]
pub struct ScryfallBulk {
    cards: FxHashMap<String, CardMetadata>,
}

impl ScryfallBulk {
    /// Load a JSON array of card objects.
    ///
    /// Cards that cannot be converted (no type line) are skipped. When a
    /// name repeats, the first printing wins.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<ScryfallCard> = serde_json::from_str(json)?;
        let mut cards = FxHashMap::default();

        for card in raw {
            match card.into_metadata() {
                Ok(meta) => {
                    cards.entry(meta.name.clone()).or_insert(meta);
                }
                Err(err) => debug!(error = %err, "skipping bulk card"),
            }
        }

        Ok(Self { cards })
    }

    /// Number of distinct card names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl MetadataLookup for ScryfallBulk {
    fn lookup(&self, name: &str) -> Option<&CardMetadata> {
        self.cards.get(name)
    }
}

impl MetadataSource for ScryfallBulk {
    fn fetch(&self, name: &str) -> Result<Option<CardMetadata>> {
        Ok(self.cards.get(name).cloned())
    }
}
