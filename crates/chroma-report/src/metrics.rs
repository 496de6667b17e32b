//! Execution-time and color-distribution metrics.

use chroma_core::{ColoringSolution, UNCOLORED};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Wall-clock stopwatch.
#[derive(Debug, Default)]
pub struct Timer {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the stopwatch.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the stopwatch, fixing the elapsed duration.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }

    /// Elapsed seconds between the last start/stop pair.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Combined user+system CPU time consumed by this process, in seconds.
///
/// Serves as the CPU-utilization proxy in reports; returns 0.0 on
/// platforms without rusage.
#[cfg(unix)]
pub fn cpu_time_seconds() -> f64 {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
    if rc != 0 {
        log::warn!("getrusage failed, reporting 0.0 CPU time");
        return 0.0;
    }
    let user = usage.ru_utime.tv_sec as f64 + usage.ru_utime.tv_usec as f64 / 1e6;
    let sys = usage.ru_stime.tv_sec as f64 + usage.ru_stime.tv_usec as f64 / 1e6;
    user + sys
}

#[cfg(not(unix))]
pub fn cpu_time_seconds() -> f64 {
    0.0
}

/// Arithmetic mean of the color values; 0.0 for an empty slice.
pub fn mean(data: &[u32]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|&c| c as f64).sum::<f64>() / data.len() as f64
}

/// Population variance of the color values, computed as `E[x²] − mean²`;
/// 0.0 for an empty slice.
pub fn variance(data: &[u32]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let sq_sum: f64 = data.iter().map(|&c| (c as f64) * (c as f64)).sum();
    sq_sum / data.len() as f64 - m * m
}

/// Speedup of a parallel run over the sequential baseline; 0.0 when the
/// parallel time is zero.
pub fn speedup(seq_time: f64, par_time: f64) -> f64 {
    if par_time > 0.0 {
        seq_time / par_time
    } else {
        0.0
    }
}

/// Aggregate metrics for one coloring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Distinct colors used
    pub total_colors: usize,

    /// Speculate/repair rounds executed
    pub rounds: usize,

    /// Wall-clock time of the coloring run, seconds
    pub execution_time_secs: f64,

    /// Process CPU time at collection, seconds
    pub cpu_time_secs: f64,

    /// Mean of the per-vertex color values
    pub mean_color: f64,

    /// Population variance of the per-vertex color values
    pub color_variance: f64,
}

impl RunMetrics {
    /// Collects metrics from a terminal solution and its run timer.
    pub fn collect(solution: &ColoringSolution, execution_time_secs: f64) -> Self {
        debug_assert!(solution.colors.iter().all(|&c| c != UNCOLORED));
        Self {
            total_colors: solution.color_count(),
            rounds: solution.rounds,
            execution_time_secs,
            cpu_time_secs: cpu_time_seconds(),
            mean_color: mean(&solution.colors),
            color_variance: variance(&solution.colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_known_values() {
        assert_eq!(mean(&[0, 1, 2, 3]), 1.5);
        assert_eq!(mean(&[5]), 5.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_variance_known_values() {
        // E[x²] − mean² for [0,1,2,3]: 3.5 − 2.25 = 1.25
        assert!((variance(&[0, 1, 2, 3]) - 1.25).abs() < 1e-12);
        assert_eq!(variance(&[7, 7, 7]), 0.0);
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(4.0, 2.0), 2.0);
        assert_eq!(speedup(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_timer_measures_elapsed() {
        let mut timer = Timer::new();
        timer.start();
        std::thread::sleep(std::time::Duration::from_millis(10));
        timer.stop();

        assert!(timer.elapsed_seconds() >= 0.01);
        // Stop without a start leaves the last measurement intact
        let before = timer.elapsed_seconds();
        timer.stop();
        assert_eq!(timer.elapsed_seconds(), before);
    }

    #[test]
    fn test_cpu_time_is_nonnegative() {
        assert!(cpu_time_seconds() >= 0.0);
    }

    #[test]
    fn test_collect_from_solution() {
        let solution = ColoringSolution {
            colors: vec![0, 1, 0, 1],
            rounds: 3,
        };
        let metrics = RunMetrics::collect(&solution, 0.25);

        assert_eq!(metrics.total_colors, 2);
        assert_eq!(metrics.rounds, 3);
        assert_eq!(metrics.execution_time_secs, 0.25);
        assert_eq!(metrics.mean_color, 0.5);
        assert!((metrics.color_variance - 0.25).abs() < 1e-12);
    }
}
