use crate::types::{FractalError, Point2, PointSet};
use crate::util::linspace;

/// Sampled gridlines clipped to the triangle `y <= 0.5 − |x − 0.5|`,
/// rescaled so the apex sits at height `0.5·tan 60°`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleGrid {
    /// Lines of constant `y`, dense in `x`.
    pub horizontal: PointSet,
    /// Lines of constant `x`, dense in `y`.
    pub vertical: PointSet,
}

impl TriangleGrid {
    /// Equilateral height of a unit-base triangle.
    pub fn height() -> f64 {
        0.5 * 60f64.to_radians().tan()
    }

    pub fn layers(&self) -> Vec<PointSet> {
        vec![self.horizontal.clone(), self.vertical.clone()]
    }
}

/// Clip the mesh `xs × ys` (rows over `ys`) to the triangle and rescale `y`.
fn clipped_mesh(xs: &[f64], ys: &[f64]) -> Result<PointSet, FractalError> {
    let mut pts: PointSet = ys
        .iter()
        .flat_map(|&y| xs.iter().map(move |&x| Point2::new(x, y)))
        .filter(|p| p.y <= 0.5 - (p.x - 0.5).abs())
        .collect();
    let y_max = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    if y_max <= 0.0 {
        return Err(FractalError::degenerate(
            "grid too coarse: no sample above the triangle base",
        ));
    }
    let scale = TriangleGrid::height() / y_max;
    for p in pts.iter_mut() {
        p.y *= scale;
    }
    Ok(pts)
}

/// Cartesian gridlines inside an equilateral triangle.
///
/// `n_gridlines` lines per direction, each sampled at `n_points` points.
/// Pre: both counts `>= 2` and fine enough to sample above the base.
pub fn triangle_grid(n_gridlines: usize, n_points: usize) -> Result<TriangleGrid, FractalError> {
    if n_gridlines < 2 || n_points < 2 {
        return Err(FractalError::invalid(format!(
            "triangle grid needs >= 2 gridlines and points, got {n_gridlines} x {n_points}"
        )));
    }
    let lines = linspace(0.0, 1.0, n_gridlines);
    let dense = linspace(0.0, 1.0, n_points);
    let vertical = clipped_mesh(&lines, &dense)?;
    let horizontal = clipped_mesh(&dense, &lines)?;
    tracing::debug!(
        horizontal = horizontal.len(),
        vertical = vertical.len(),
        "triangle grid"
    );
    Ok(TriangleGrid {
        horizontal,
        vertical,
    })
}
