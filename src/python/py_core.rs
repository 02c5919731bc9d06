//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{CardEntry, CardMetadata, ColorSet, TypeLine};

/// Python wrapper for CardEntry.
#[pyclass(name = "CardEntry")]
#[derive(Clone, Debug)]
pub struct PyCardEntry(pub CardEntry);

#[pymethods]
impl PyCardEntry {
    #[new]
    fn new(name: String, quantity: u32) -> Self {
        Self(CardEntry::new(name, quantity))
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn quantity(&self) -> u32 {
        self.0.quantity
    }

    fn __repr__(&self) -> String {
        format!("CardEntry(name={:?}, quantity={})", self.0.name, self.0.quantity)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for CardMetadata.
#[pyclass(name = "CardMetadata")]
#[derive(Clone, Debug)]
pub struct PyCardMetadata(pub CardMetadata);

#[pymethods]
impl PyCardMetadata {
    /// Create metadata from a printed type line and color symbols.
    #[new]
    #[pyo3(signature = (name, type_line, converted_mana_cost, colors = Vec::new()))]
    fn new(name: String, type_line: &str, converted_mana_cost: f64, colors: Vec<String>) -> Self {
        Self(
            CardMetadata::new(name, TypeLine::parse(type_line), converted_mana_cost)
                .with_colors(ColorSet::from_symbols(colors)),
        )
    }

    /// Decode a Scryfall card object.
    #[staticmethod]
    fn from_scryfall_json(json: &str) -> PyResult<Self> {
        crate::metadata::ScryfallCard::from_json(json)
            .and_then(|card| card.into_metadata())
            .map(Self)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn type_line(&self) -> Vec<String> {
        self.0.type_line.tokens().map(str::to_string).collect()
    }

    #[getter]
    fn converted_mana_cost(&self) -> f64 {
        self.0.converted_mana_cost
    }

    #[getter]
    fn colors(&self) -> Vec<String> {
        self.0.colors.iter().map(|c| c.symbol().to_string()).collect()
    }

    fn __repr__(&self) -> String {
        format!("CardMetadata(name={:?}, type_line={:?})", self.0.name, self.0.type_line.to_string())
    }
}
