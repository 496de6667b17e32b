//! # chroma-report
//!
//! Run metrics and report files for the Chroma coloring engine:
//! - [`Timer`] / [`cpu_time_seconds`]: wall-clock and CPU-time measurement
//! - [`mean`] / [`variance`] / [`speedup`]: color distribution statistics
//! - [`write_assignment`]: original-id → color mapping file
//! - [`append_csv_row`]: appending CSV report with header-on-empty

pub mod metrics;
pub mod writer;

pub use metrics::{cpu_time_seconds, mean, speedup, variance, RunMetrics, Timer};
pub use writer::{append_csv_row, write_assignment, RunRecord};
