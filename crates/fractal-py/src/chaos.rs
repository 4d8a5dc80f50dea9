use crate::common::Xy;
use fractal::apollonian::{chaos_map_iter as chaos_map_iter_rs, ChaosCfg, Reuse};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Apollonian gasket via the chaos game; `dtype` is "float32" or "float64".
#[pyfunction]
#[pyo3(signature = (iters=10, n_inputs_reused=-1, dtype="float32", seed=1234, prog_bar=false))]
pub fn chaos_map_iter(
    iters: usize,
    n_inputs_reused: i64,
    dtype: &str,
    seed: u64,
    prog_bar: bool,
) -> PyResult<Vec<Xy>> {
    let cfg = ChaosCfg {
        iters,
        reuse: Reuse::from_count(n_inputs_reused),
        seed,
        show_progress: prog_bar,
    };
    match dtype {
        "float32" => Ok(chaos_map_iter_rs::<f32>(&cfg)
            .into_iter()
            .map(|p| (f64::from(p.x), f64::from(p.y)))
            .collect()),
        "float64" => Ok(chaos_map_iter_rs::<f64>(&cfg)
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect()),
        other => Err(PyValueError::new_err(format!(
            "unsupported dtype {other:?} (expected \"float32\" or \"float64\")"
        ))),
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(chaos_map_iter, m)?)?;
    Ok(())
}
