//! Unfolding an isosceles triangle into a disk.
//!
//! Pipeline (`unfold_iso_triangle`):
//! 1. `shift_iso_triangle`: midline to `x = 0`, apex to `y = 0`.
//! 2. `stretch_iso_triangle`: scale `x` by `2π·height/base`, so the base spans
//!    one full turn of a circle of radius `height`.
//! 3. `warp_iso_triangle`: `r = −y`, `θ = −π/2 + warpage·x/y`, back to Cartesian.
//!
//! The apex and midline come from the sample's bounding box. The warp then drops
//! every point of the topmost sampled row, which is the lone apex only when the
//! apex itself is sampled. For [`triangle_grid`] output that needs `x = 0.5` to be
//! an exact sample: with an even `n_points` the whole top horizontal gridline is
//! dropped, and with an even `n_gridlines` the two vertical lines nearest the
//! midline both lose their top point.
//! This is a fan transform, not a true conformal map.

mod grid;

pub use grid::{triangle_grid, TriangleGrid};

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::types::{FractalError, Point2, PointSet};
use crate::util::{is_finite_point, BBox2};

/// Optional `(r, θ) ↦ (r', θ')` post-processing inside the warp.
pub type PolarMap<'a> = &'a dyn Fn(f64, f64) -> (f64, f64);

/// Translate so the apex is at `y = 0` and the midline at `x = 0`.
///
/// Pre: the sample has non-zero width and height.
pub fn shift_iso_triangle(triangle: &[Point2]) -> Result<PointSet, FractalError> {
    let b = BBox2::of_nondegenerate(triangle)?;
    let mid = (b.x_max + b.x_min) / 2.0;
    Ok(triangle
        .iter()
        .map(|p| Point2::new(p.x - mid, p.y - b.y_max))
        .collect())
}

/// Scale `x` so that `base = 2π·height`.
///
/// Pre: the sample has non-zero width and height.
pub fn stretch_iso_triangle(triangle: &[Point2]) -> Result<PointSet, FractalError> {
    let b = BBox2::of_nondegenerate(triangle)?;
    let factor = TAU * b.height() / b.width();
    Ok(triangle
        .iter()
        .map(|p| Point2::new(factor * p.x, p.y))
        .collect())
}

/// Fan a shifted, stretched triangle into a disk.
///
/// Points with `y == 0` (the apex row) are dropped; so is any point the
/// optional `custom_map` sends to a non-finite value.
pub fn warp_iso_triangle(
    triangle: &[Point2],
    warpage: f64,
    custom_map: Option<PolarMap<'_>>,
) -> Result<PointSet, FractalError> {
    try_warp_iso_triangle(triangle, warpage, |r, theta| Ok(apply(custom_map, r, theta)))
}

/// [`warp_iso_triangle`] with a fallible polar map.
///
/// The first `Err` from `custom_map` stops the warp and is returned unchanged.
pub fn try_warp_iso_triangle<E, F>(
    triangle: &[Point2],
    warpage: f64,
    mut custom_map: F,
) -> Result<PointSet, E>
where
    E: From<FractalError>,
    F: FnMut(f64, f64) -> Result<(f64, f64), E>,
{
    if !warpage.is_finite() {
        return Err(FractalError::invalid("warpage must be finite").into());
    }
    let mut out = PointSet::with_capacity(triangle.len());
    for p in triangle.iter().filter(|p| p.y != 0.0) {
        let (r, theta) = custom_map(-p.y, -FRAC_PI_2 + warpage * p.x / p.y)?;
        let q = Point2::new(r * theta.cos(), r * theta.sin());
        if is_finite_point(&q) {
            out.push(q);
        }
    }
    Ok(out)
}

fn apply(custom_map: Option<PolarMap<'_>>, r: f64, theta: f64) -> (f64, f64) {
    match custom_map {
        Some(f) => f(r, theta),
        None => (r, theta),
    }
}

/// `shift → stretch → warp`.
pub fn unfold_iso_triangle(
    triangle: &[Point2],
    warpage: f64,
    custom_map: Option<PolarMap<'_>>,
) -> Result<PointSet, FractalError> {
    try_unfold_iso_triangle(triangle, warpage, |r, theta| Ok(apply(custom_map, r, theta)))
}

/// [`unfold_iso_triangle`] with a fallible polar map, e.g. a foreign callback.
pub fn try_unfold_iso_triangle<E, F>(
    triangle: &[Point2],
    warpage: f64,
    custom_map: F,
) -> Result<PointSet, E>
where
    E: From<FractalError>,
    F: FnMut(f64, f64) -> Result<(f64, f64), E>,
{
    let shifted = shift_iso_triangle(triangle)?;
    let stretched = stretch_iso_triangle(&shifted)?;
    let warped = try_warp_iso_triangle(&stretched, warpage, custom_map)?;
    tracing::debug!(
        input = triangle.len(),
        output = warped.len(),
        warpage,
        "unfold iso triangle"
    );
    Ok(warped)
}
