//! Python bindings for the ring-sort engine.
//!
//! # Quick Start
//!
//! ```python
//! import ring_sort
//!
//! session = ring_sort.Session()
//! session.activate(1)          # lift the top group of peg 1
//! session.activate(3)          # "committed"
//! session.advance(700)         # run the slide and landing phases
//! print(session.pegs, session.move_count)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// ring_sort: peg puzzle engine with phased move animation.
#[pymodule]
fn ring_sort(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    Ok(())
}
