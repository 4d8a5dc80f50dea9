//! Point tables on disk: one row per `(frame, layer, x, y)`.

use anyhow::{bail, Context, Result};
use fractal::frames::FrameSequence;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Output encoding, chosen from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            other => bail!(
                "unsupported output extension {:?} for {} (expected .csv or .parquet)",
                other,
                path.display()
            ),
        }
    }
}

/// Flatten `frames` into a table.
pub fn to_dataframe(frames: &FrameSequence) -> Result<DataFrame> {
    let mut frame: Vec<u32> = Vec::new();
    let mut layer: Vec<u32> = Vec::new();
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for (i, j, p) in frames.rows() {
        frame.push(u32::try_from(i).context("frame index exceeds u32")?);
        layer.push(u32::try_from(j).context("layer index exceeds u32")?);
        xs.push(p.x);
        ys.push(p.y);
    }
    let df = df!(
        "frame" => frame,
        "layer" => layer,
        "x" => xs,
        "y" => ys
    )?;
    Ok(df)
}

/// Write `frames` to `path`; returns the number of rows written.
pub fn write_table(path: &Path, frames: &FrameSequence) -> Result<usize> {
    let format = TableFormat::from_path(path)?;
    let mut df = to_dataframe(frames)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(df.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal::frames::Frame;
    use fractal::Point2;
    use tempfile::tempdir;

    fn two_layer_frames() -> FrameSequence {
        FrameSequence::new(vec![Frame::Layers(vec![
            vec![Point2::new(0.0, 1.0)],
            vec![Point2::new(2.0, 3.0), Point2::new(4.0, 5.0)],
        ])])
        .unwrap()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            TableFormat::from_path(Path::new("a/b.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("b.parquet")).unwrap(),
            TableFormat::Parquet
        );
        assert!(TableFormat::from_path(Path::new("b.gif")).is_err());
    }

    #[test]
    fn csv_has_one_row_per_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("pts.csv");
        let rows = write_table(&path, &two_layer_frames()).unwrap();
        assert_eq!(rows, 3);
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "frame,layer,x,y");
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("0,1,4"));
    }

    #[test]
    fn dataframe_columns() {
        let df = to_dataframe(&two_layer_frames()).unwrap();
        assert_eq!(df.width(), 4);
        assert_eq!(df.height(), 3);
    }
}
