use fractal::{FractalError, Point2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub type Xy = (f64, f64);

pub fn to_py_points(points: &[Point2]) -> Vec<Xy> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

pub fn from_py_points(points: Vec<Xy>) -> Vec<Point2> {
    points.into_iter().map(|(x, y)| Point2::new(x, y)).collect()
}

pub fn map_fractal_err(err: FractalError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
