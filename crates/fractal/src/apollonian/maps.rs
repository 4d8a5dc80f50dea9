//! The four plane maps whose attractor is the Apollonian gasket.
//!
//! - `f1(x, y) = (x, −y)` is total.
//! - `f2`, `f3`, `f4` are Möbius-type inversions; each divides by a sum of squares
//!   that vanishes at exactly one point: `(0, 1/4)`, `(1, 1)` and `(−1, 1)`.
//!
//! `GasketMap::apply_checked` returns `None` at those poles (and whenever the
//! result overflows the chosen precision).

use nalgebra::{RealField, Vector2};

use crate::util::is_finite_point;

#[inline]
fn k<T: RealField + Copy>(v: f64) -> T {
    nalgebra::convert(v)
}

/// One of the four gasket maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GasketMap {
    F1,
    F2,
    F3,
    F4,
}

impl GasketMap {
    pub const ALL: [GasketMap; 4] = [GasketMap::F1, GasketMap::F2, GasketMap::F3, GasketMap::F4];

    /// Map for a draw in `0..4`.
    #[inline]
    pub fn from_index(i: u8) -> Self {
        Self::ALL[(i & 3) as usize]
    }

    /// Evaluate the map; `None` on a zero denominator or non-finite output.
    pub fn apply_checked<T: RealField + Copy>(self, p: Vector2<T>) -> Option<Vector2<T>> {
        let (x, y) = (p.x, p.y);
        let one = T::one();
        let two: T = k(2.0);
        let r2 = x * x + y * y;
        let (num_x, num_y, denom) = match self {
            GasketMap::F1 => return Some(Vector2::new(x, -y)),
            GasketMap::F2 => {
                let sixteen: T = k(16.0);
                let four: T = k(4.0);
                let denom = sixteen * r2 - k::<T>(8.0) * y + one;
                (x, four * r2 - y, denom)
            }
            GasketMap::F3 => {
                let dx = x - one;
                let dy = y - one;
                let denom = dx * dx + dy * dy;
                (r2 - x - two * y + one, r2 - two * x - y + one, denom)
            }
            GasketMap::F4 => {
                let dx = x + one;
                let dy = y - one;
                let denom = dx * dx + dy * dy;
                (-(r2 + x - two * y + one), r2 + two * x - y + one, denom)
            }
        };
        if denom == T::zero() {
            return None;
        }
        let out = Vector2::new(num_x / denom, num_y / denom);
        is_finite_point(&out).then_some(out)
    }

    /// Evaluate the map, substituting `f1` where it is undefined.
    #[inline]
    pub fn apply_or_reflect<T: RealField + Copy>(self, p: Vector2<T>) -> (Vector2<T>, bool) {
        match self.apply_checked(p) {
            Some(q) => (q, false),
            None => (Vector2::new(p.x, -p.y), true),
        }
    }
}
