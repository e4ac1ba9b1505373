//! Segment tables on disk: CSV with columns `x0,y0,x1,y1`.

use anyhow::{anyhow, Context, Result};
use planar::LineSegment;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

pub const COLUMNS: [&str; 4] = ["x0", "y0", "x1", "y1"];

/// Read every row as one segment. Extra columns are ignored; integer columns
/// are cast to f32; nulls are rejected with the offending row.
pub fn read_segments(path: &Path) -> Result<Vec<LineSegment>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;

    let mut cols: Vec<Vec<f32>> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let series = df
            .column(name)
            .with_context(|| format!("{}: missing column `{name}`", path.display()))?
            .cast(&DataType::Float32)?;
        let values = series
            .f32()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.ok_or_else(|| anyhow!("{}: empty `{name}` in row {row}", path.display()))
            })
            .collect::<Result<Vec<f32>>>()?;
        cols.push(values);
    }
    tracing::debug!(rows = df.height(), path = %path.display(), "segments_loaded");
    Ok((0..df.height())
        .map(|i| LineSegment::from_coords(cols[0][i], cols[1][i], cols[2][i], cols[3][i]))
        .collect())
}

/// Write segments with a header row, creating parent directories.
pub fn write_segments(path: &Path, segs: &[LineSegment]) -> Result<()> {
    let mut df = df!(
        "x0" => segs.iter().map(|s| s.start().x).collect::<Vec<f32>>(),
        "y0" => segs.iter().map(|s| s.start().y).collect::<Vec<f32>>(),
        "x1" => segs.iter().map(|s| s.end().x).collect::<Vec<f32>>(),
        "y1" => segs.iter().map(|s| s.end().y).collect::<Vec<f32>>()
    )?;
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
