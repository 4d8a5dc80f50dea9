use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fractal::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{ChaosRun, Sidecar};
use table::write_table;

#[derive(Parser)]
#[command(name = "fractal-cli")]
#[command(about = "Generate fractal point sets and write them as point tables")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Iterated copies of a regular polygon
    Polygon(PolygonArgs),
    /// Center-of-mass triangle subdivision
    Com(ComArgs),
    /// Apollonian gasket via the chaos game
    Gasket(GasketArgs),
    /// Triangular grid unfolded into a disk
    Unfold(UnfoldArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Serialize, Debug)]
struct PolygonArgs {
    #[arg(long, default_value_t = 3)]
    sides: usize,
    /// Orientation of the first vertex, radians
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_2, allow_negative_numbers = true)]
    orientation: f64,
    #[arg(long, default_value_t = 6)]
    iters: usize,
    #[arg(long, default_value_t = 0.5)]
    scaling: f64,
    /// Extra rotation per generation, radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotation: f64,
    /// Write one frame per generation instead of the last generation only
    #[arg(long)]
    frames: bool,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Serialize, Debug)]
struct ComArgs {
    #[arg(long, default_value_t = 6)]
    iters: usize,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Precision {
    F32,
    F64,
}

#[derive(Args, Serialize, Debug)]
struct GasketArgs {
    #[arg(long, default_value_t = 10)]
    iters: usize,
    /// Generations reused per round: < 0 all, 0 latest only, k > 0 the last k
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    reuse: i64,
    #[arg(long, default_value_t = 1234)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Precision::F32)]
    precision: Precision,
    /// Log every round
    #[arg(long)]
    progress: bool,
    /// Write one cumulative frame per round
    #[arg(long)]
    frames: bool,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Serialize, Debug)]
struct UnfoldArgs {
    #[arg(long, default_value_t = 21)]
    gridlines: usize,
    #[arg(long, default_value_t = 100_001)]
    points: usize,
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    warpage: f64,
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Polygon(args) => {
            let frames = polygon_frames(&args)?;
            emit("polygon", &args.out, &frames, &args, None)
        }
        Action::Com(args) => {
            let frames = com_frames(&args)?;
            emit("com", &args.out, &frames, &args, None)
        }
        Action::Gasket(args) => {
            let frames = gasket_frames(&args)?;
            let chaos = ChaosRun {
                seed: args.seed,
                precision: args.precision,
            };
            emit("gasket", &args.out, &frames, &args, Some(chaos))
        }
        Action::Unfold(args) => {
            let frames = unfold_frames(&args)?;
            emit("unfold", &args.out, &frames, &args, None)
        }
        Action::Report => report(),
    }
}

fn emit<P: Serialize>(
    command: &'static str,
    out: &Path,
    frames: &FrameSequence,
    args: &P,
    chaos: Option<ChaosRun>,
) -> Result<()> {
    let rows = write_table(out, frames)?;
    tracing::info!(command, frames = frames.len(), rows, out = %out.display(), "wrote table");
    let sidecar = Sidecar::describe(command, out, frames, serde_json::to_value(args)?, chaos);
    let path = sidecar.write(out)?;
    tracing::info!(path = %path.display(), "wrote provenance");
    Ok(())
}

fn polygon_frames(args: &PolygonArgs) -> Result<FrameSequence> {
    tracing::info!(?args, "polygon");
    let poly = reg_poly(args.sides, args.orientation)?;
    let cfg = IterateCfg {
        iters: args.iters,
        scaling: args.scaling,
        rotation: args.rotation,
    };
    let frames = if args.frames {
        let gens = iterate_shape(poly.center, &poly.vertices, cfg)?.generations();
        FrameSequence::new(gens.into_iter().map(Frame::Points).collect())?
    } else {
        FrameSequence::single(iterate_shape_points(&poly, cfg)?)?
    };
    Ok(frames)
}

fn com_frames(args: &ComArgs) -> Result<FrameSequence> {
    tracing::info!(?args, "com");
    Ok(FrameSequence::single(com_fractal(args.iters)?)?)
}

/// Run the game at precision `T` and widen every generation to `f64` for output.
fn gasket_history<T: nalgebra::RealField + Copy>(cfg: &ChaosCfg) -> Vec<PointSet> {
    let widen = |v: T| nalgebra::try_convert::<T, f64>(v).unwrap_or(f64::NAN);
    let history: ChaosHistory<T> = chaos_history(cfg);
    history
        .generations()
        .iter()
        .map(|g| g.iter().map(|p| Point2::new(widen(p.x), widen(p.y))).collect())
        .collect()
}

fn gasket_frames(args: &GasketArgs) -> Result<FrameSequence> {
    tracing::info!(?args, "gasket");
    let cfg = ChaosCfg {
        iters: args.iters,
        reuse: Reuse::from_count(args.reuse),
        seed: args.seed,
        show_progress: args.progress,
    };
    let gens = match args.precision {
        Precision::F32 => gasket_history::<f32>(&cfg),
        Precision::F64 => gasket_history::<f64>(&cfg),
    };
    let frames = if args.frames {
        FrameSequence::cumulative(&gens)?
    } else {
        FrameSequence::single(gens.concat())?
    };
    Ok(frames)
}

fn unfold_frames(args: &UnfoldArgs) -> Result<FrameSequence> {
    tracing::info!(?args, "unfold");
    let grid = triangle_grid(args.gridlines, args.points)?;
    let horizontal = unfold_iso_triangle(&grid.horizontal, args.warpage, None)?;
    let vertical = unfold_iso_triangle(&grid.vertical, args.warpage, None)?;
    let layers = Frame::Layers(vec![horizontal, vertical]);
    Ok(FrameSequence::new(vec![layers])?)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "fractal_version": fractal::VERSION,
        "commands": ["polygon", "com", "gasket", "unfold"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
