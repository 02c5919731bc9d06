//! Parser and statistics bindings for Python.

use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::{CardEntry, CardMetadata};
use crate::parser;
use crate::stats::{group_by_category, DeckStats};

use super::py_core::{PyCardEntry, PyCardMetadata};

/// Parse decklist text into entries.
#[pyfunction]
pub fn parse_decklist(text: &str) -> Vec<PyCardEntry> {
    parser::parse(text).into_iter().map(PyCardEntry).collect()
}

fn unwrap_inputs(
    entries: Vec<PyCardEntry>,
    metadata: Vec<PyCardMetadata>,
) -> (Vec<CardEntry>, FxHashMap<String, CardMetadata>) {
    let entries = entries.into_iter().map(|e| e.0).collect();
    let lookup = metadata
        .into_iter()
        .map(|m| (m.0.name.clone(), m.0))
        .collect();
    (entries, lookup)
}

/// Python wrapper for DeckStats.
#[pyclass(name = "DeckStats")]
#[derive(Clone)]
pub struct PyDeckStats(pub DeckStats);

#[pymethods]
impl PyDeckStats {
    #[getter]
    fn total_cards(&self) -> u64 {
        self.0.total_cards
    }

    /// `[(bucket_label, count)]`, eight buckets "0".."6", "7+".
    #[getter]
    fn mana_curve(&self) -> Vec<(String, u64)> {
        self.0
            .curve
            .points()
            .into_iter()
            .map(|p| (p.bucket.to_string(), p.count))
            .collect()
    }

    /// Average mana value, or `None` when the deck has no non-land cards.
    #[getter]
    fn average_mana_value(&self) -> Option<f64> {
        self.0.average.value()
    }

    #[getter]
    fn colors(&self) -> Vec<(String, u64)> {
        self.0.colors.iter().map(|c| (c.color.to_string(), c.count)).collect()
    }

    #[getter]
    fn types(&self) -> Vec<(String, u64)> {
        self.0.types.iter().map(|t| (t.category.to_string(), t.count)).collect()
    }

    fn __repr__(&self) -> String {
        format!("DeckStats(total_cards={}, average={})", self.0.total_cards, self.0.average)
    }
}

/// Compute deck statistics from entries and the metadata resolved so far.
#[pyfunction]
pub fn deck_stats(entries: Vec<PyCardEntry>, metadata: Vec<PyCardMetadata>) -> PyDeckStats {
    let (entries, lookup) = unwrap_inputs(entries, metadata);
    PyDeckStats(DeckStats::compute(&entries, &lookup))
}

/// Group entries into `[(heading, [entries])]` sections.
#[pyfunction]
pub fn category_sections(
    entries: Vec<PyCardEntry>,
    metadata: Vec<PyCardMetadata>,
) -> Vec<(String, Vec<PyCardEntry>)> {
    let (entries, lookup) = unwrap_inputs(entries, metadata);
    group_by_category(&entries, &lookup)
        .into_iter()
        .map(|s| (s.heading(), s.entries.into_iter().map(PyCardEntry).collect()))
        .collect()
}
