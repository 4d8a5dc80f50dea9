//! Regular polygons and iterated self-similar copies of a shape.
//!
//! Model
//! - `reg_poly(n, orientation)`: `n` vertices on the unit circle at angles
//!   `orientation + 2πk/n`, centre at the origin.
//! - `iterate_shape`: generation `i` places a copy of the vertex set, scaled by
//!   `scaling^i` and rotated by `i·rotation`, at every point of generation `i−1`.
//!   Generation 0 is `{center}`; generation `i ≥ 1` has `n_vertices^i` points.
//!
//! `scaling >= 1` is accepted and simply lets coordinates grow without bound.

use nalgebra::Rotation2;

use crate::types::{FractalError, Point2, PointSet, Polygon};

/// Regular `n`-gon on the unit circle, rotated by `orientation` (radians).
///
/// Pre: `n >= 3`, `orientation` finite.
pub fn reg_poly(n: usize, orientation: f64) -> Result<Polygon, FractalError> {
    if n < 3 {
        return Err(FractalError::invalid(format!(
            "regular polygon needs at least 3 sides, got {n}"
        )));
    }
    if !orientation.is_finite() {
        return Err(FractalError::invalid("orientation must be finite"));
    }
    let step = std::f64::consts::TAU / n as f64;
    let vertices = (0..n)
        .map(|k| {
            let theta = orientation + step * k as f64;
            Point2::new(theta.cos(), theta.sin())
        })
        .collect();
    Ok(Polygon {
        center: Point2::zeros(),
        vertices,
    })
}

/// Scaling and rotation applied per generation.
#[derive(Clone, Copy, Debug)]
pub struct IterateCfg {
    pub iters: usize,
    pub scaling: f64,
    pub rotation: f64,
}

impl Default for IterateCfg {
    fn default() -> Self {
        Self {
            iters: 6,
            scaling: 0.5,
            rotation: 0.0,
        }
    }
}

/// Lazy generation stream produced by [`iterate_shape`].
///
/// Clone it (or call [`IterateShape::restart`]) to replay from generation 1.
#[derive(Clone, Debug)]
pub struct IterateShape {
    center: Point2,
    base: PointSet,
    cfg: IterateCfg,
    rotation: Option<Rotation2<f64>>,
    done: usize,
    coords: PointSet,
    offsets: PointSet,
}

impl IterateShape {
    /// Generation 0: the centre alone.
    pub fn seed(&self) -> PointSet {
        vec![self.center]
    }

    /// Rewind to the state right after construction.
    pub fn restart(&mut self) {
        self.done = 0;
        self.coords = self.seed();
        self.offsets = self.base.clone();
    }

    /// Point count of generation `i` (`n_vertices^i`), `None` on overflow.
    pub fn generation_len(&self, i: usize) -> Option<usize> {
        let exp = u32::try_from(i).ok()?;
        self.base.len().checked_pow(exp)
    }

    /// Collect generation 0 followed by every remaining generation.
    pub fn generations(mut self) -> Vec<PointSet> {
        self.restart();
        let mut out = vec![self.seed()];
        out.extend(self);
        out
    }
}

impl Iterator for IterateShape {
    type Item = PointSet;

    fn next(&mut self) -> Option<PointSet> {
        if self.done >= self.cfg.iters {
            return None;
        }
        for v in self.offsets.iter_mut() {
            *v *= self.cfg.scaling;
            if let Some(rot) = &self.rotation {
                *v = rot * *v;
            }
        }
        let mut next = Vec::with_capacity(self.coords.len().saturating_mul(self.offsets.len()));
        for c in &self.coords {
            for v in &self.offsets {
                next.push(c + v);
            }
        }
        self.coords = next;
        self.done += 1;
        Some(self.coords.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cfg.iters - self.done;
        (left, Some(left))
    }
}

impl ExactSizeIterator for IterateShape {}

/// Replace every point by a scaled, rotated copy of `vertices`, `cfg.iters` times.
///
/// Pre: `vertices` non-empty; `scaling` and `rotation` finite.
pub fn iterate_shape(
    center: Point2,
    vertices: &[Point2],
    cfg: IterateCfg,
) -> Result<IterateShape, FractalError> {
    if vertices.is_empty() {
        return Err(FractalError::invalid("shape needs at least one vertex"));
    }
    if !cfg.scaling.is_finite() {
        return Err(FractalError::invalid("scaling must be finite"));
    }
    if !cfg.rotation.is_finite() {
        return Err(FractalError::invalid("rotation must be finite"));
    }
    // rotation == 0 only skips the matrix product
    let rotation = (cfg.rotation != 0.0).then(|| Rotation2::new(cfg.rotation));
    Ok(IterateShape {
        center,
        base: vertices.to_vec(),
        cfg,
        rotation,
        done: 0,
        coords: vec![center],
        offsets: vertices.to_vec(),
    })
}

/// Final generation of [`iterate_shape`] (generation 0 when `iters == 0`).
pub fn iterate_shape_points(
    polygon: &Polygon,
    cfg: IterateCfg,
) -> Result<PointSet, FractalError> {
    let shape = iterate_shape(polygon.center, &polygon.vertices, cfg)?;
    let seed = shape.seed();
    Ok(shape.last().unwrap_or(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn square_vertices() {
        let sq = reg_poly(4, 0.0).unwrap();
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        assert_eq!(sq.vertices.len(), 4);
        for (v, (x, y)) in sq.vertices.iter().zip(expected) {
            assert!((v - Point2::new(x, y)).norm() < 1e-12, "{v:?}");
        }
        assert_eq!(sq.center, Point2::zeros());
    }

    #[test]
    fn rejects_fewer_than_three_sides() {
        for n in 0..3 {
            assert!(matches!(
                reg_poly(n, 0.0),
                Err(FractalError::InvalidParams { .. })
            ));
        }
        assert!(reg_poly(5, f64::NAN).is_err());
    }

    #[test]
    fn triangle_orientation_puts_apex_on_top() {
        let tri = reg_poly(3, FRAC_PI_2).unwrap();
        assert!((tri.vertices[0] - Point2::new(0.0, 1.0)).norm() < 1e-12);
    }

    proptest! {
        #[test]
        fn vertices_on_unit_circle_and_evenly_spaced(n in 3usize..40, orientation in -PI..PI) {
            let p = reg_poly(n, orientation).unwrap();
            let step = TAU / n as f64;
            for (k, v) in p.vertices.iter().enumerate() {
                prop_assert!((v.norm() - 1.0).abs() < 1e-12);
                let next = p.vertices[(k + 1) % n];
                // counterclockwise by exactly one step
                let cross = v.x * next.y - v.y * next.x;
                let dot = v.dot(&next);
                prop_assert!((cross.atan2(dot) - step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn generation_counts_grow_geometrically() {
        let tri = reg_poly(3, FRAC_PI_2).unwrap();
        let shape = iterate_shape(tri.center, &tri.vertices, IterateCfg::default()).unwrap();
        assert_eq!(shape.seed(), vec![Point2::zeros()]);
        assert_eq!(shape.len(), 6);
        for (i, g) in shape.clone().enumerate() {
            let i = i + 1;
            assert_eq!(g.len(), 3usize.pow(i as u32));
            assert_eq!(shape.generation_len(i), Some(g.len()));
        }
    }

    #[test]
    fn first_generation_is_scaled_polygon() {
        let sq = reg_poly(4, 0.0).unwrap();
        let cfg = IterateCfg {
            iters: 1,
            scaling: 0.5,
            rotation: 0.0,
        };
        let pts = iterate_shape_points(&sq, cfg).unwrap();
        for (p, v) in pts.iter().zip(&sq.vertices) {
            assert!((p - v * 0.5).norm() < 1e-12);
        }
    }

    #[test]
    fn rotation_accumulates_per_generation() {
        let center = Point2::new(0.0, 0.0);
        let vertex = [Point2::new(1.0, 0.0)];
        let cfg = IterateCfg {
            iters: 2,
            scaling: 1.0,
            rotation: FRAC_PI_2,
        };
        let gens: Vec<_> = iterate_shape(center, &vertex, cfg).unwrap().collect();
        // gen1: rotate once -> (0,1); gen2: (0,1) + rotate twice -> (0,1) + (-1,0)
        assert!((gens[0][0] - Point2::new(0.0, 1.0)).norm() < 1e-12);
        assert!((gens[1][0] - Point2::new(-1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn restart_replays_identically() {
        let pent = reg_poly(5, 0.3).unwrap();
        let cfg = IterateCfg {
            iters: 3,
            scaling: 0.4,
            rotation: 0.2,
        };
        let mut shape = iterate_shape(pent.center, &pent.vertices, cfg).unwrap();
        let first: Vec<_> = shape.by_ref().collect();
        assert!(shape.next().is_none());
        shape.restart();
        let second: Vec<_> = shape.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_iterations_yield_the_center() {
        let tri = reg_poly(3, 0.0).unwrap();
        let cfg = IterateCfg {
            iters: 0,
            ..IterateCfg::default()
        };
        assert_eq!(iterate_shape_points(&tri, cfg).unwrap(), vec![tri.center]);
        let all = iterate_shape(tri.center, &tri.vertices, cfg)
            .unwrap()
            .generations();
        assert_eq!(all, vec![vec![tri.center]]);
    }

    #[test]
    fn expanding_scaling_is_allowed() {
        let sq = reg_poly(4, 0.0).unwrap();
        let cfg = IterateCfg {
            iters: 3,
            scaling: 2.0,
            rotation: 0.0,
        };
        let pts = iterate_shape_points(&sq, cfg).unwrap();
        assert_eq!(pts.len(), 64);
        assert!(pts.iter().any(|p| p.norm() > 8.0));
    }
}
