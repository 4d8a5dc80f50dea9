//! PyO3 bindings for the `fractal` generators.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as lists of `(x, y)` tuples;
//!   NumPy conversion happens on the Python side.
//! - Errors from the core surface as `ValueError`.

use pyo3::prelude::*;

mod chaos;
mod common;
mod geom;

#[pymodule]
fn fractal_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    chaos::register(m)?;
    m.add("__version__", fractal::VERSION)?;
    Ok(())
}
