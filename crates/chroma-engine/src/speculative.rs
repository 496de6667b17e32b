//! Speculative parallel greedy coloring.
//!
//! Sequential greedy coloring serializes on an ordering dependency: a
//! vertex's color depends on the already-final colors of its neighbors.
//! This engine breaks the dependency optimistically. Each round, every
//! uncolored vertex speculates a color from a possibly-stale view of its
//! neighbors, then an exact detection pass finds edges whose endpoints
//! collided and evicts one endpoint back to uncolored. The loop repeats
//! until a round detects no conflict, at which point every remaining
//! color is final and the assignment is proper by construction.
//!
//! Phase A reads race with concurrent Phase A writes by design: a stale
//! read can only produce a sub-optimal choice or a collision, and every
//! collision is caught by the authoritative Phase B re-check before
//! anything is committed. Nothing invalid survives a quiet round.

use chroma_core::{ChromaError, ColoringSolution, GraphStore, Result, UNCOLORED};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Environment variable overriding the worker pool size.
pub const THREADS_ENV_VAR: &str = "CHROMA_NUM_THREADS";

/// Configuration for the speculative coloring engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Worker pool size. `None` falls back to `CHROMA_NUM_THREADS`,
    /// then to the platform's detected hardware concurrency.
    pub num_threads: Option<usize>,
}

impl EngineConfig {
    /// Creates a config with an explicit worker count.
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
        }
    }

    /// Resolves the effective worker count: explicit value, then the
    /// `CHROMA_NUM_THREADS` environment variable, then hardware concurrency.
    ///
    /// ## Errors
    /// `ConfigError` for a zero thread count or an unparsable env value.
    pub fn resolve_threads(&self) -> Result<usize> {
        if let Some(n) = self.num_threads {
            return Self::check_nonzero(n, "configured");
        }

        if let Ok(value) = std::env::var(THREADS_ENV_VAR) {
            let n = value.trim().parse::<usize>().map_err(|_| {
                ChromaError::config(format!(
                    "{} must be a positive integer, got '{}'",
                    THREADS_ENV_VAR, value
                ))
            })?;
            return Self::check_nonzero(n, THREADS_ENV_VAR);
        }

        Ok(std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1))
    }

    fn check_nonzero(n: usize, source: &str) -> Result<usize> {
        if n == 0 {
            return Err(ChromaError::config(format!(
                "Thread count from {} must be > 0",
                source
            )));
        }
        Ok(n)
    }
}

/// Round-based speculate/detect/repair coloring engine.
pub struct SpeculativeColoring {
    config: EngineConfig,
}

impl SpeculativeColoring {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Colors the graph, running rounds until one completes conflict-free.
    ///
    /// The result is a proper, complete coloring for any thread count;
    /// the concrete color values may vary between runs.
    pub fn color(&self, graph: &GraphStore) -> Result<ColoringSolution> {
        let n = graph.vertex_count();
        if n == 0 {
            return Ok(ColoringSolution::unassigned(0));
        }

        let num_threads = self.config.resolve_threads()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| ChromaError::internal(format!("Failed to build worker pool: {}", e)))?;

        log::debug!(
            "[SPECULATE] Coloring {} vertices on {} worker(s)",
            n,
            num_threads
        );

        let adjacency = graph.adjacency();
        let colors: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(UNCOLORED)).collect();
        let mut rounds = 0;

        loop {
            rounds += 1;
            pool.install(|| Self::speculate(adjacency, &colors));

            let conflicted = AtomicBool::new(false);
            pool.install(|| Self::detect_and_evict(adjacency, &colors, &conflicted));

            let conflicted = conflicted.load(Ordering::Relaxed);
            log::debug!("[SPECULATE] Round {}: conflicts={}", rounds, conflicted);
            if !conflicted {
                break;
            }
        }

        let colors: Vec<u32> = colors.into_iter().map(AtomicU32::into_inner).collect();
        log::info!(
            "[SPECULATE] Converged after {} round(s) on {} worker(s)",
            rounds,
            num_threads
        );

        Ok(ColoringSolution { colors, rounds })
    }

    /// Phase A: every uncolored vertex picks the smallest color not seen
    /// on its neighbors. Neighbor reads are relaxed and may observe a
    /// mid-round write from another worker; Phase B re-checks exactly.
    fn speculate(adjacency: &[Vec<usize>], colors: &[AtomicU32]) {
        colors.par_iter().enumerate().for_each(|(u, slot)| {
            if slot.load(Ordering::Relaxed) != UNCOLORED {
                return;
            }

            let neighbors = &adjacency[u];
            // Among degree+1 candidate colors at least one is always free,
            // so observed colors beyond that range cannot matter.
            let mut used = vec![false; neighbors.len() + 1];
            for &v in neighbors {
                let c = colors[v].load(Ordering::Relaxed);
                if c != UNCOLORED && (c as usize) < used.len() {
                    used[c as usize] = true;
                }
            }

            let chosen = used
                .iter()
                .position(|&taken| !taken)
                .unwrap_or(neighbors.len());
            slot.store(chosen as u32, Ordering::Relaxed);
        });
    }

    /// Phase B: scan each edge once in canonical direction `u < v`; on a
    /// color collision evict the higher-indexed endpoint and raise the
    /// shared conflict flag. Eviction is an idempotent sentinel store, so
    /// two edges evicting the same vertex concurrently cannot corrupt
    /// state. The fixed higher-index tie-break converges empirically on
    /// all known inputs; no formal round bound is claimed for it.
    fn detect_and_evict(adjacency: &[Vec<usize>], colors: &[AtomicU32], conflicted: &AtomicBool) {
        colors.par_iter().enumerate().for_each(|(u, slot)| {
            let cu = slot.load(Ordering::Relaxed);
            if cu == UNCOLORED {
                return;
            }
            for &v in &adjacency[u] {
                if u < v && colors[v].load(Ordering::Relaxed) == cu {
                    colors[v].store(UNCOLORED, Ordering::Relaxed);
                    conflicted.store(true, Ordering::Relaxed);
                }
            }
        });
    }
}
