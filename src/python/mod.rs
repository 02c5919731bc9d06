//! Python bindings for rust-deckbox.
//!
//! # Quick Start
//!
//! ```python
//! import rust_deckbox as deckbox
//!
//! entries = deckbox.parse_decklist("2x Sol Ring\n30 Forest")
//! meta = [
//!     deckbox.CardMetadata("Sol Ring", "Artifact", 1.0),
//!     deckbox.CardMetadata("Forest", "Basic Land — Forest", 0.0),
//! ]
//! stats = deckbox.deck_stats(entries, meta)
//! print(stats.mana_curve, stats.average_mana_value)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_stats;

pub use py_core::*;
pub use py_stats::*;

/// rust-deckbox: decklist parsing and deck statistics.
#[pymodule]
fn rust_deckbox(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardEntry>()?;
    m.add_class::<PyCardMetadata>()?;
    m.add_class::<PyDeckStats>()?;

    m.add_function(wrap_pyfunction!(parse_decklist, m)?)?;
    m.add_function(wrap_pyfunction!(deck_stats, m)?)?;
    m.add_function(wrap_pyfunction!(category_sections, m)?)?;

    Ok(())
}
