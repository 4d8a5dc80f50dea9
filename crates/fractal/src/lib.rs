//! Planar fractal point generators.
//!
//! Generators
//! - `polygon`: regular polygons and iterated self-similar copies of a shape.
//! - `com`: center-of-mass (centroid) triangle subdivision.
//! - `apollonian`: the Apollonian gasket via a seeded chaos game.
//! - `warp`: triangular grids unfolded into disks.
//!
//! Everything returns plain point sets (`Vec<Vector2<_>>`). Drawing is left to a
//! renderer; `frames` validates the frame sequences such a renderer consumes.
//! Calls share no state: randomness comes from an explicit seed or a
//! caller-owned RNG.

pub mod apollonian;
pub mod com;
pub mod frames;
pub mod polygon;
pub mod types;
pub mod util;
pub mod warp;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use types::{FractalError, Point2, PointSet, Polygon, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::apollonian::{
        chaos_history, chaos_map, chaos_map_iter, chaos_map_iter_with_rng, generation_sizes,
        ChaosCfg, ChaosHistory, GasketMap, Reuse,
    };
    pub use crate::com::{centroid_split, com_fractal, com_from_triangle, subdivide};
    pub use crate::frames::{AnimationCfg, Frame, FrameSequence, Window};
    pub use crate::polygon::{iterate_shape, iterate_shape_points, reg_poly, IterateCfg};
    pub use crate::types::{FractalError, Point2, PointSet, Polygon, Triangle};
    pub use crate::warp::{
        shift_iso_triangle, stretch_iso_triangle, triangle_grid, try_unfold_iso_triangle,
        try_warp_iso_triangle, unfold_iso_triangle, warp_iso_triangle, TriangleGrid,
    };
    pub use nalgebra::Vector2 as Vec2;
}
