//! Frame sequences handed to a renderer, plus the plot window.
//!
//! The renderer itself (drawing, GIF/PNG encoding) lives outside this crate.
//! What it consumes is validated here so a malformed sequence fails loudly:
//! - every frame is of the same kind (`Points` or `Layers`);
//! - no frame, and no layer, is empty;
//! - all coordinates are finite.

use crate::types::{FractalError, PointSet};
use crate::util::{is_finite_point, BBox2};

/// One displayed frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// A single point set.
    Points(PointSet),
    /// Several point sets drawn together (e.g. horizontal and vertical gridlines).
    Layers(Vec<PointSet>),
}

impl Frame {
    /// Points across all layers.
    pub fn point_count(&self) -> usize {
        self.layers().iter().map(Vec::len).sum()
    }

    fn layers(&self) -> &[PointSet] {
        match self {
            Frame::Points(p) => std::slice::from_ref(p),
            Frame::Layers(l) => l,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Frame::Points(_) => "points",
            Frame::Layers(_) => "layers",
        }
    }
}

/// Axis window `[x.0, x.1] × [y.0, y.1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Window {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Result<Self, FractalError> {
        for (axis, (lo, hi)) in [("x", x), ("y", y)] {
            if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
                return Err(FractalError::invalid(format!(
                    "window {axis}-range must be finite with min < max, got ({lo}, {hi})"
                )));
            }
        }
        Ok(Self { x, y })
    }

    fn padded(b: BBox2) -> Self {
        let pad = |lo: f64, hi: f64| {
            let mid = (lo + hi) / 2.0;
            let half = (hi - lo) / 2.0;
            if half > 0.0 {
                (mid - 1.1 * half, mid + 1.1 * half)
            } else {
                (mid - 0.5, mid + 0.5)
            }
        };
        Self {
            x: pad(b.x_min, b.x_max),
            y: pad(b.y_min, b.y_max),
        }
    }
}

/// Playback settings for an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationCfg {
    pub fps: u32,
    /// `None` means [`FrameSequence::auto_window`].
    pub window: Option<Window>,
    pub keep_axis: bool,
}

impl Default for AnimationCfg {
    fn default() -> Self {
        Self {
            fps: 60,
            window: None,
            keep_axis: true,
        }
    }
}

impl AnimationCfg {
    pub fn validate(&self) -> Result<(), FractalError> {
        if self.fps == 0 {
            return Err(FractalError::invalid("fps must be > 0"));
        }
        Ok(())
    }
}

/// Non-empty, homogeneous, finite sequence of frames.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub fn new(frames: Vec<Frame>) -> Result<Self, FractalError> {
        let first = frames
            .first()
            .ok_or_else(|| FractalError::shape("frame sequence is empty"))?;
        for (i, frame) in frames.iter().enumerate() {
            if frame.kind() != first.kind() {
                return Err(FractalError::shape(format!(
                    "frame {i} holds {} but frame 0 holds {}",
                    frame.kind(),
                    first.kind()
                )));
            }
            if frame.layers().is_empty() {
                return Err(FractalError::shape(format!("frame {i} has no layers")));
            }
            for (j, layer) in frame.layers().iter().enumerate() {
                if layer.is_empty() {
                    return Err(FractalError::shape(format!(
                        "frame {i}, layer {j} has no points"
                    )));
                }
                if let Some(k) = layer.iter().position(|p| !is_finite_point(p)) {
                    return Err(FractalError::shape(format!(
                        "frame {i}, layer {j}, point {k} is not finite"
                    )));
                }
            }
        }
        Ok(Self { frames })
    }

    /// Single-frame sequence for a static plot.
    pub fn single(points: PointSet) -> Result<Self, FractalError> {
        Self::new(vec![Frame::Points(points)])
    }

    /// Frame `i` shows generations `0..=i` together.
    pub fn cumulative(generations: &[PointSet]) -> Result<Self, FractalError> {
        let mut acc = PointSet::new();
        let frames = generations
            .iter()
            .map(|g| {
                acc.extend_from_slice(g);
                Frame::Points(acc.clone())
            })
            .collect();
        Self::new(frames)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Bounding box over all frames, widened by 10% about its centre.
    pub fn auto_window(&self) -> Window {
        let all: PointSet = self
            .frames
            .iter()
            .flat_map(|f| f.layers().iter().flatten().copied())
            .collect();
        // non-empty by construction
        let b = BBox2::of(&all).unwrap_or(BBox2 {
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        });
        Window::padded(b)
    }

    /// `cfg.window` if set, otherwise [`Self::auto_window`].
    pub fn window(&self, cfg: &AnimationCfg) -> Window {
        cfg.window.unwrap_or_else(|| self.auto_window())
    }

    /// `(frame, layer, point)` rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize, crate::types::Point2)> + '_ {
        self.frames.iter().enumerate().flat_map(|(i, f)| {
            f.layers()
                .iter()
                .enumerate()
                .flat_map(move |(j, l)| l.iter().map(move |p| (i, j, *p)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point2;

    fn pts(v: &[(f64, f64)]) -> PointSet {
        v.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn rejects_mixed_and_empty_sequences() {
        assert!(matches!(
            FrameSequence::new(vec![]),
            Err(FractalError::ShapeMismatch { .. })
        ));
        let mixed = vec![
            Frame::Points(pts(&[(0.0, 0.0)])),
            Frame::Layers(vec![pts(&[(1.0, 1.0)])]),
        ];
        let err = FrameSequence::new(mixed).unwrap_err();
        assert!(err.to_string().contains("frame 1 holds layers"));
        assert!(FrameSequence::new(vec![Frame::Layers(vec![])]).is_err());
        assert!(FrameSequence::new(vec![Frame::Points(vec![])]).is_err());
        assert!(FrameSequence::single(pts(&[(f64::NAN, 0.0)])).is_err());
    }

    #[test]
    fn auto_window_pads_ten_percent() {
        let seq = FrameSequence::new(vec![
            Frame::Points(pts(&[(-1.0, 0.0), (1.0, 2.0)])),
            Frame::Points(pts(&[(3.0, 1.0)])),
        ])
        .unwrap();
        let w = seq.auto_window();
        // x in [-1, 3]: centre 1, half-width 2 -> 2.2
        assert!((w.x.0 + 1.2).abs() < 1e-12 && (w.x.1 - 3.2).abs() < 1e-12);
        assert!((w.y.0 + 0.1).abs() < 1e-12 && (w.y.1 - 2.1).abs() < 1e-12);
    }

    #[test]
    fn degenerate_extent_still_gives_a_window() {
        let seq = FrameSequence::single(pts(&[(2.0, 5.0)])).unwrap();
        let w = seq.auto_window();
        assert_eq!(w.x, (1.5, 2.5));
        assert_eq!(w.y, (4.5, 5.5));
    }

    #[test]
    fn explicit_window_wins() {
        let seq = FrameSequence::single(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
        let explicit = Window::new((-5.0, 5.0), (-1.0, 1.0)).unwrap();
        let cfg = AnimationCfg {
            window: Some(explicit),
            ..AnimationCfg::default()
        };
        assert_eq!(seq.window(&cfg), explicit);
        assert!(Window::new((1.0, 1.0), (0.0, 1.0)).is_err());
        assert!(AnimationCfg { fps: 0, ..cfg }.validate().is_err());
    }

    #[test]
    fn cumulative_frames_accumulate() {
        let gens = vec![pts(&[(0.0, 0.0)]), pts(&[(1.0, 0.0), (2.0, 0.0)])];
        let seq = FrameSequence::cumulative(&gens).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.frames()[1], Frame::Points(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])));
        assert_eq!(seq.rows().count(), 4);
    }

    #[test]
    fn rows_carry_layer_index() {
        let seq = FrameSequence::new(vec![Frame::Layers(vec![
            pts(&[(0.0, 0.0)]),
            pts(&[(1.0, 1.0), (2.0, 2.0)]),
        ])])
        .unwrap();
        let rows: Vec<_> = seq.rows().collect();
        assert_eq!(rows[0].1, 0);
        assert_eq!(rows[2], (0, 1, Point2::new(2.0, 2.0)));
        assert_eq!(seq.frames()[0].point_count(), 3);
    }
}
