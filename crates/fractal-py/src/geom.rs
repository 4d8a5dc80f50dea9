//! Deterministic generators (kept separate so `lib.rs` stays tiny).

use crate::common::{from_py_points, map_fractal_err, to_py_points, Xy};
use fractal::com::com_fractal as com_fractal_rs;
use fractal::polygon::{iterate_shape, reg_poly as reg_poly_rs, IterateCfg};
use fractal::warp::{
    triangle_grid as triangle_grid_rs, try_unfold_iso_triangle, unfold_iso_triangle as unfold_rs,
};
use fractal::FractalError;
use pyo3::prelude::*;

/// Regular polygon: `(center, vertices)`.
#[pyfunction]
#[pyo3(signature = (n, orientation=0.0))]
pub fn reg_poly(n: usize, orientation: f64) -> PyResult<(Xy, Vec<Xy>)> {
    let p = reg_poly_rs(n, orientation).map_err(map_fractal_err)?;
    Ok(((p.center.x, p.center.y), to_py_points(&p.vertices)))
}

/// All `iters + 1` generations of the iterated shape; generation 0 is `[center]`.
#[pyfunction]
#[pyo3(signature = (center, vertices, iters, scaling=0.5, rotation=0.0))]
pub fn iterate_shape_generations(
    center: Xy,
    vertices: Vec<Xy>,
    iters: usize,
    scaling: f64,
    rotation: f64,
) -> PyResult<Vec<Vec<Xy>>> {
    let cfg = IterateCfg {
        iters,
        scaling,
        rotation,
    };
    let c = fractal::Point2::new(center.0, center.1);
    let shape = iterate_shape(c, &from_py_points(vertices), cfg).map_err(map_fractal_err)?;
    Ok(shape
        .generations()
        .iter()
        .map(|g| to_py_points(g))
        .collect())
}

#[pyfunction]
#[pyo3(signature = (iters=1))]
pub fn com_fractal(iters: usize) -> PyResult<Vec<Xy>> {
    com_fractal_rs(iters)
        .map(|p| to_py_points(&p))
        .map_err(map_fractal_err)
}

/// `(horizontal, vertical)` gridlines inside the triangle.
#[pyfunction]
#[pyo3(signature = (n_gridlines=21, n_points=100001))]
pub fn triangle_grid(n_gridlines: usize, n_points: usize) -> PyResult<(Vec<Xy>, Vec<Xy>)> {
    let g = triangle_grid_rs(n_gridlines, n_points).map_err(map_fractal_err)?;
    Ok((to_py_points(&g.horizontal), to_py_points(&g.vertical)))
}

/// Shift, stretch and warp an isosceles triangle sample into a disk.
///
/// `custom_map`, if given, is called as `custom_map(r, theta) -> (r, theta)`.
/// An exception raised by it, or a return value that is not a pair of floats,
/// aborts the unfold and is re-raised.
#[pyfunction]
#[pyo3(signature = (triangle, warpage=1.0, custom_map=None))]
pub fn unfold_iso_triangle(
    py: Python<'_>,
    triangle: Vec<Xy>,
    warpage: f64,
    custom_map: Option<PyObject>,
) -> PyResult<Vec<Xy>> {
    let pts = from_py_points(triangle);
    match custom_map {
        None => unfold_rs(&pts, warpage, None)
            .map(|p| to_py_points(&p))
            .map_err(map_fractal_err),
        Some(f) => {
            let polar = |r: f64, theta: f64| -> Result<(f64, f64), CallbackError> {
                let mapped = f.call1(py, (r, theta))?;
                Ok(mapped.extract::<(f64, f64)>(py)?)
            };
            try_unfold_iso_triangle(&pts, warpage, polar)
                .map(|p| to_py_points(&p))
                .map_err(|CallbackError(err)| err)
        }
    }
}

/// Either the Python exception raised by `custom_map` or a core error.
struct CallbackError(PyErr);

impl From<PyErr> for CallbackError {
    fn from(err: PyErr) -> Self {
        CallbackError(err)
    }
}

impl From<FractalError> for CallbackError {
    fn from(err: FractalError) -> Self {
        CallbackError(map_fractal_err(err))
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(reg_poly, m)?)?;
    m.add_function(wrap_pyfunction!(iterate_shape_generations, m)?)?;
    m.add_function(wrap_pyfunction!(com_fractal, m)?)?;
    m.add_function(wrap_pyfunction!(triangle_grid, m)?)?;
    m.add_function(wrap_pyfunction!(unfold_iso_triangle, m)?)?;
    Ok(())
}
