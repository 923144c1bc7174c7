//! Two-Column CSV Export
//!
//! One file per characteristic: a header row naming both axes, then one
//! `x,y` row per sampled point. Scientific notation keeps the files
//! compact and loss-free for the small torque values motors produce.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use motorbench_core::PerformanceCurve;

use crate::ExportResult;

/// Write a curve as two-column CSV to any writer.
///
/// The header row carries the axis labels, so the file is
/// self-describing without a sidecar.
pub fn write_curve<W: Write>(curve: &PerformanceCurve, out: &mut W) -> ExportResult<()> {
    writeln!(out, "{},{}", curve.x_label(), curve.y_label())?;
    for point in curve.points() {
        writeln!(out, "{:e},{:e}", point.x, point.y)?;
    }
    Ok(())
}

/// Write a curve into `dir`, one file per characteristic.
///
/// The filename derives from the characteristic
/// (`torque-to-speed.csv`, ...). Returns the path written.
pub fn save_curve(curve: &PerformanceCurve, dir: &Path) -> ExportResult<PathBuf> {
    let mut path = dir.join(curve.characteristic().file_stem());
    path.set_extension("csv");

    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);
    write_curve(curve, &mut out)?;
    out.flush()?;

    log::debug!("wrote {} points to {}", curve.len(), path.display());
    Ok(path)
}
