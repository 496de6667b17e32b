//! # chroma-engine
//!
//! Greedy graph coloring engines over a [`chroma_core::GraphStore`]:
//! - [`SpeculativeColoring`]: round-based speculate/detect/repair engine
//!   running on a fixed-size worker pool
//! - [`sequential_greedy`]: single-threaded baseline for speedup
//!   measurements and differential testing
//!
//! Both produce a [`chroma_core::ColoringSolution`] that is proper
//! (no edge with equal endpoint colors) and complete at termination.
//! Neither guarantees a minimal color count, and the parallel engine's
//! concrete color values may differ between runs; only validity is
//! invariant across thread counts.

pub mod sequential;
pub mod speculative;

pub use sequential::sequential_greedy;
pub use speculative::{EngineConfig, SpeculativeColoring, THREADS_ENV_VAR};
