use nalgebra::{RealField, Vector2};

use crate::types::{FractalError, Point2};

/// `n` evenly spaced samples on `[start, stop]`, endpoints included.
///
/// Sample `i` is `start + i * step`; the last sample is pinned to `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Axis-aligned bounding box of a point sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BBox2 {
    /// Bounding box of `points`; `None` for an empty slice.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| Self {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Bounding box with strictly positive, finite width and height.
    pub fn of_nondegenerate(points: &[Point2]) -> Result<Self, FractalError> {
        let b = Self::of(points)
            .ok_or_else(|| FractalError::degenerate("empty point set has no extent"))?;
        let (w, h) = (b.width(), b.height());
        if !(w.is_finite() && w > 0.0) {
            return Err(FractalError::degenerate(format!(
                "point set has zero or non-finite width ({w})"
            )));
        }
        if !(h.is_finite() && h > 0.0) {
            return Err(FractalError::degenerate(format!(
                "point set has zero or non-finite height ({h})"
            )));
        }
        Ok(b)
    }
}

#[inline]
pub fn is_finite_point<T: RealField + Copy>(p: &Vector2<T>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
