//! Chaos-game frames for an Apollonian gasket animation.
//!
//! Runs 12 rounds with full reuse, builds one cumulative frame per round and
//! prints the frame sizes plus the auto window a renderer would use.

use fractal::prelude::*;

fn main() -> Result<(), FractalError> {
    let cfg = ChaosCfg {
        iters: 12,
        ..ChaosCfg::default()
    };
    let history: ChaosHistory<f64> = chaos_history(&cfg);
    let frames = FrameSequence::cumulative(history.generations())?;
    let anim = AnimationCfg::default();
    anim.validate()?;
    let w = frames.window(&anim);
    for (i, frame) in frames.frames().iter().enumerate() {
        if let Frame::Points(p) = frame {
            println!("frame={i} points={}", p.len());
        }
    }
    println!(
        "window x=[{:.3}, {:.3}] y=[{:.3}, {:.3}] fps={}",
        w.x.0, w.x.1, w.y.0, w.y.1, anim.fps
    );
    Ok(())
}
