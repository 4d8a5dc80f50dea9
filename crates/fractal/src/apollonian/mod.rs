//! Apollonian gasket via the chaos game.
//!
//! Model
//! - Seed: one point uniform in `[0, 1)²` drawn from an owned, seeded RNG.
//! - Round: pick the active points per [`Reuse`], map each through a uniformly
//!   chosen [`GasketMap`], append the images as a new generation.
//! - Result: all generations concatenated (the whole trajectory).
//!
//! Determinism
//! - All map choices of a round are drawn as one batch, in point order, before
//!   any map is applied. Applying the maps in parallel therefore would not change
//!   the output; this implementation stays single-threaded.
//! - At a pole of `f2`/`f3`/`f4` the point is reflected by `f1` instead
//!   (`GasketMap::apply_or_reflect`), so every round keeps its size and the RNG
//!   stream is consumed identically.
//!
//! Precision is the type parameter `T` (`f32` or `f64`).

mod history;
pub mod maps;

pub use history::{generation_sizes, ChaosHistory, Reuse};
pub use maps::GasketMap;

use nalgebra::{RealField, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chaos-game run parameters.
#[derive(Clone, Copy, Debug)]
pub struct ChaosCfg {
    pub iters: usize,
    pub reuse: Reuse,
    pub seed: u64,
    /// Emit one `tracing` event per round.
    pub show_progress: bool,
}

impl Default for ChaosCfg {
    fn default() -> Self {
        Self {
            iters: 10,
            reuse: Reuse::All,
            seed: 1234,
            show_progress: false,
        }
    }
}

/// Apply a randomly chosen gasket map to each point; output order matches input.
pub fn chaos_map<T, R>(points: &[Vector2<T>], rng: &mut R) -> Vec<Vector2<T>>
where
    T: RealField + Copy,
    R: Rng + ?Sized,
{
    chaos_map_counted(points, rng).0
}

/// [`chaos_map`] plus the number of points that fell back to `f1`.
fn chaos_map_counted<T, R>(points: &[Vector2<T>], rng: &mut R) -> (Vec<Vector2<T>>, usize)
where
    T: RealField + Copy,
    R: Rng + ?Sized,
{
    let choices: Vec<GasketMap> = (0..points.len())
        .map(|_| GasketMap::from_index(rng.gen_range(0..4u8)))
        .collect();
    let mut fallbacks = 0usize;
    let out = points
        .iter()
        .zip(&choices)
        .map(|(p, map)| {
            let (q, fell_back) = map.apply_or_reflect(*p);
            fallbacks += usize::from(fell_back);
            q
        })
        .collect();
    (out, fallbacks)
}

/// Draw the seed point, uniform in `[0, 1)²`.
fn seed_point<T: RealField + Copy, R: Rng + ?Sized>(rng: &mut R) -> Vector2<T> {
    let x: f64 = rng.gen();
    let y: f64 = rng.gen();
    Vector2::new(nalgebra::convert(x), nalgebra::convert(y))
}

/// Run the game with a caller-owned RNG and keep the generation structure.
pub fn chaos_history_with_rng<T, R>(rng: &mut R, cfg: &ChaosCfg) -> ChaosHistory<T>
where
    T: RealField + Copy,
    R: Rng + ?Sized,
{
    let mut history = ChaosHistory::new(seed_point(rng));
    for round in 0..cfg.iters {
        let active = history.active(cfg.reuse);
        let (next, fallbacks) = chaos_map_counted(&active, rng);
        if fallbacks > 0 {
            tracing::debug!(round, fallbacks, "gasket map pole hit, reflected instead");
        }
        history.push(next);
        if cfg.show_progress {
            tracing::info!(
                round = round + 1,
                of = cfg.iters,
                active = active.len(),
                total = history.total_points(),
                "chaos round"
            );
        }
    }
    history
}

/// Run the game from `cfg.seed` and keep the generation structure.
pub fn chaos_history<T: RealField + Copy>(cfg: &ChaosCfg) -> ChaosHistory<T> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    chaos_history_with_rng(&mut rng, cfg)
}

/// Full trajectory of the game with a caller-owned RNG.
pub fn chaos_map_iter_with_rng<T, R>(rng: &mut R, cfg: &ChaosCfg) -> Vec<Vector2<T>>
where
    T: RealField + Copy,
    R: Rng + ?Sized,
{
    chaos_history_with_rng(rng, cfg).into_points()
}

/// Full trajectory of the game seeded from `cfg.seed`.
pub fn chaos_map_iter<T: RealField + Copy>(cfg: &ChaosCfg) -> Vec<Vector2<T>> {
    chaos_history(cfg).into_points()
}
