//! Report file writers.
//!
//! Two output surfaces, both byte-compatible with the historical report
//! format: a tab-separated assignment file mapping original user ids to
//! colors, and an appending CSV of per-run aggregate metrics whose header
//! is emitted only when the file is empty or newly created.

use crate::metrics::RunMetrics;
use chroma_core::{ColoringSolution, GraphStore, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One row of the CSV report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Algorithm label ("Parallel" or "Sequential")
    pub algorithm: String,

    /// Worker threads used (1 for the sequential baseline)
    pub threads: usize,

    /// Distinct colors used
    pub total_colors: usize,

    /// Wall-clock time, seconds
    pub execution_time_secs: f64,

    /// Process CPU time, seconds
    pub cpu_time_secs: f64,

    /// Mean of the color values
    pub mean_color: f64,

    /// Population variance of the color values
    pub color_variance: f64,
}

impl RunRecord {
    /// Builds a row from collected run metrics.
    pub fn from_metrics(algorithm: impl Into<String>, threads: usize, metrics: &RunMetrics) -> Self {
        Self {
            algorithm: algorithm.into(),
            threads,
            total_colors: metrics.total_colors,
            execution_time_secs: metrics.execution_time_secs,
            cpu_time_secs: metrics.cpu_time_secs,
            mean_color: metrics.mean_color,
            color_variance: metrics.color_variance,
        }
    }
}

const CSV_HEADER: &str = "Algorithm,Threads,TotalColors,ExecutionTime,CPUTime,MeanColor,ColorVariance";

/// Appends one run record to the CSV report at `path`.
///
/// The header row is written only when the file is empty or did not exist.
pub fn append_csv_row<P: AsRef<Path>>(path: P, record: &RunRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    if file.metadata()?.len() == 0 {
        writeln!(file, "{}", CSV_HEADER)?;
    }

    writeln!(
        file,
        "{},{},{},{},{},{},{}",
        record.algorithm,
        record.threads,
        record.total_colors,
        record.execution_time_secs,
        record.cpu_time_secs,
        record.mean_color,
        record.color_variance
    )?;

    log::debug!("Appended run record to '{}'", path.as_ref().display());
    Ok(())
}

/// Writes the original-id → color assignment file.
///
/// Format: a `OriginalUserID\tColor` header followed by one tab-separated
/// row per vertex, in compressed-index order.
pub fn write_assignment<P: AsRef<Path>>(
    path: P,
    graph: &GraphStore,
    solution: &ColoringSolution,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(path.as_ref())?);

    writeln!(file, "OriginalUserID\tColor")?;
    for v in 0..graph.vertex_count() {
        writeln!(file, "{}\t{}", graph.original_id(v)?, solution.colors[v])?;
    }
    file.flush()?;

    log::info!(
        "Assignment for {} vertices written to '{}'",
        graph.vertex_count(),
        path.as_ref().display()
    );
    Ok(())
}
