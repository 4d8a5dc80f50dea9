//! Append-only generation history of a chaos game.

use nalgebra::{RealField, Vector2};

/// Which previous generations feed the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reuse {
    /// Every generation so far (count doubles each round).
    All,
    /// Only the latest generation (classic single-chain game).
    Latest,
    /// The last `k` generations, clamped to the history length. `Window(0)` acts as `Latest`.
    ///
    /// Counts whole generations, not the last `k + 1` individual points a flat
    /// trajectory slice would give.
    Window(usize),
}

impl Reuse {
    /// Signed-count convention: `< 0` all, `0` latest, `k > 0` window of `k`.
    pub fn from_count(n: i64) -> Self {
        match n {
            n if n < 0 => Reuse::All,
            0 => Reuse::Latest,
            n => Reuse::Window(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    /// Index of the first generation taken from a history of `len` generations.
    #[inline]
    fn start(self, len: usize) -> usize {
        match self {
            Reuse::All => 0,
            Reuse::Latest => len.saturating_sub(1),
            Reuse::Window(k) => len.saturating_sub(k.max(1)),
        }
    }
}

/// Point count of every generation for `iters` rounds under `reuse`.
///
/// Generation 0 is the single seed point. Saturates instead of overflowing.
pub fn generation_sizes(iters: usize, reuse: Reuse) -> Vec<usize> {
    let mut sizes = Vec::with_capacity(iters + 1);
    sizes.push(1usize);
    for _ in 0..iters {
        let from = reuse.start(sizes.len());
        let next = sizes[from..]
            .iter()
            .fold(0usize, |acc, &s| acc.saturating_add(s));
        sizes.push(next);
    }
    sizes
}

/// Generations produced so far; entries are never mutated once pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct ChaosHistory<T: RealField + Copy> {
    generations: Vec<Vec<Vector2<T>>>,
}

impl<T: RealField + Copy> ChaosHistory<T> {
    pub fn new(seed: Vector2<T>) -> Self {
        Self {
            generations: vec![vec![seed]],
        }
    }

    pub fn push(&mut self, generation: Vec<Vector2<T>>) {
        self.generations.push(generation);
    }

    /// Concatenation of the generations selected by `reuse`, oldest first.
    pub fn active(&self, reuse: Reuse) -> Vec<Vector2<T>> {
        let from = reuse.start(self.generations.len());
        self.generations[from..].concat()
    }

    pub fn generations(&self) -> &[Vec<Vector2<T>>] {
        &self.generations
    }

    pub fn rounds(&self) -> usize {
        self.generations.len() - 1
    }

    /// Total points across all generations.
    pub fn total_points(&self) -> usize {
        self.generations.iter().map(Vec::len).sum()
    }

    /// Every generation concatenated in order: the full trajectory.
    pub fn into_points(self) -> Vec<Vector2<T>> {
        self.generations.concat()
    }
}
