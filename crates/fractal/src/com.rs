//! Center-of-mass (centroid) subdivision fractal.
//!
//! Each round replaces every triangle `(v0, v1, v2)` with centroid `c` by
//! `(v0, v2, c)`, `(v1, v0, c)`, `(v2, v1, c)`. This pairing keeps every child
//! anchored on one original edge and the centroid, so repeated rounds stay
//! consistent. The fractal is the first vertex of every triangle after the
//! last round: `3^(depth + 1)` points for `depth` extra rounds.

use std::f64::consts::FRAC_PI_2;

use crate::polygon::reg_poly;
use crate::types::{FractalError, PointSet, Triangle};

/// Split one triangle at its centroid into three children.
pub fn centroid_split(tri: &Triangle) -> [Triangle; 3] {
    let c = tri.centroid();
    let [v0, v1, v2] = tri.v;
    [
        Triangle::new(v0, v2, c),
        Triangle::new(v1, v0, c),
        Triangle::new(v2, v1, c),
    ]
}

/// Apply [`centroid_split`] to every triangle, `depth` times.
///
/// The collection grows by a factor of 3 per round; children of triangle `k`
/// occupy indices `3k..3k+3` of the next round.
pub fn subdivide(triangles: &[Triangle], depth: usize) -> Vec<Triangle> {
    let mut current = triangles.to_vec();
    for _ in 0..depth {
        let mut next = Vec::with_capacity(current.len().saturating_mul(3));
        for tri in &current {
            next.extend(centroid_split(tri));
        }
        current = next;
    }
    current
}

/// Center-of-mass fractal seeded by an arbitrary triangle.
///
/// Pre: `triangle` has non-zero area.
pub fn com_from_triangle(triangle: &Triangle, iters: usize) -> Result<PointSet, FractalError> {
    if triangle.is_degenerate() {
        return Err(FractalError::degenerate(
            "center-of-mass seed triangle has zero area",
        ));
    }
    let tris = subdivide(&centroid_split(triangle), iters);
    Ok(tris.iter().map(|t| t.v[0]).collect())
}

/// Center-of-mass fractal on the upright equilateral triangle `reg_poly(3, π/2)`.
pub fn com_fractal(iters: usize) -> Result<PointSet, FractalError> {
    let seed = reg_poly(3, FRAC_PI_2)?;
    let tri = Triangle::from_slice(&seed.vertices)?;
    com_from_triangle(&tri, iters)
}
