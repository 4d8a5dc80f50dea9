//! `<stem>.provenance.json` next to every point table.

use anyhow::{Context, Result};
use fractal::frames::FrameSequence;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::Precision;

/// RNG seed and arithmetic of a chaos-game run.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ChaosRun {
    pub seed: u64,
    pub precision: Precision,
}

/// How a table was produced, and its frame layout.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub command: &'static str,
    pub fractal_version: &'static str,
    pub code_rev: Option<String>,
    pub table: String,
    pub rows: usize,
    /// Point count of every frame, in `frame` column order.
    pub frame_points: Vec<usize>,
    #[serde(flatten)]
    pub chaos: Option<ChaosRun>,
    pub args: Value,
}

impl Sidecar {
    pub fn describe(
        command: &'static str,
        table: &Path,
        frames: &FrameSequence,
        args: Value,
        chaos: Option<ChaosRun>,
    ) -> Self {
        let frame_points: Vec<usize> = frames.frames().iter().map(|f| f.point_count()).collect();
        Self {
            command,
            fractal_version: fractal::VERSION,
            code_rev: code_rev(),
            table: table.display().to_string(),
            rows: frame_points.iter().sum(),
            frame_points,
            chaos,
            args,
        }
    }

    /// Serialize beside `table`; returns the sidecar path.
    pub fn write(&self, table: &Path) -> Result<PathBuf> {
        let path = sidecar_path(table);
        let body = serde_json::to_vec_pretty(self)?;
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `out/gasket.parquet` → `out/gasket.provenance.json`.
pub fn sidecar_path(table: &Path) -> PathBuf {
    table.with_extension("provenance.json")
}

/// `git describe` of the working tree, `None` outside a repository.
pub fn code_rev() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}
