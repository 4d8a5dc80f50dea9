//! Shared value types and the crate error.
//!
//! - `Point2`/`PointSet`: plain `nalgebra` vectors, insertion-ordered.
//! - `Triangle`: three vertices with centroid/area helpers.
//! - `Polygon`: centre plus counterclockwise vertices.
//! - `FractalError`: precondition, degeneracy and shape errors.

use nalgebra::Vector2;
use std::fmt;

/// A planar point.
pub type Point2 = Vector2<f64>;

/// Ordered, fixed-length sequence of points.
pub type PointSet = Vec<Point2>;

/// Errors surfaced by generators, warps and the frame boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    /// A scalar parameter violates its documented precondition.
    InvalidParams { reason: String },
    /// The geometric input is degenerate (zero area, zero extent, empty).
    Degenerate { reason: String },
    /// Frame data handed to a renderer is malformed or heterogeneous.
    ShapeMismatch { reason: String },
}

impl FractalError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    pub fn shape(reason: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
            Self::Degenerate { reason } => write!(f, "degenerate input: {reason}"),
            Self::ShapeMismatch { reason } => write!(f, "shape mismatch: {reason}"),
        }
    }
}

impl std::error::Error for FractalError {}

/// Triangle given by three vertices (any orientation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v: [Point2; 3],
}

impl Triangle {
    #[inline]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { v: [a, b, c] }
    }

    /// Build from the first three points of a slice.
    pub fn from_slice(points: &[Point2]) -> Result<Self, FractalError> {
        match points {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => Err(FractalError::invalid(format!(
                "a triangle needs exactly 3 vertices, got {}",
                points.len()
            ))),
        }
    }

    /// Center of mass `(v0 + v1 + v2) / 3`.
    #[inline]
    pub fn centroid(&self) -> Point2 {
        (self.v[0] + self.v[1] + self.v[2]) / 3.0
    }

    /// Positive for counterclockwise vertex order.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        let ab = self.v[1] - self.v[0];
        let ac = self.v[2] - self.v[0];
        0.5 * (ab.x * ac.y - ab.y * ac.x)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Zero (or non-finite) area.
    pub fn is_degenerate(&self) -> bool {
        let a = self.signed_area();
        !a.is_finite() || a == 0.0
    }
}

/// Polygon with an explicit centre; vertices run counterclockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub center: Point2,
    pub vertices: PointSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_area_and_centroid() {
        let t = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 3.0),
        );
        assert!((t.signed_area() - 3.0).abs() < 1e-12);
        let c = t.centroid();
        assert!((c - Point2::new(2.0 / 3.0, 1.0)).norm() < 1e-12);
        assert!(!t.is_degenerate());
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let t = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(t.is_degenerate());
    }

    #[test]
    fn from_slice_rejects_wrong_arity() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(matches!(
            Triangle::from_slice(&pts),
            Err(FractalError::InvalidParams { .. })
        ));
    }

    #[test]
    fn error_display() {
        let e = FractalError::degenerate("zero width");
        assert_eq!(e.to_string(), "degenerate input: zero width");
    }
}
