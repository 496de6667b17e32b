//! Color assignment produced by the coloring engines.

use crate::graph::GraphStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel for a vertex that has not been assigned a color.
///
/// Real colors are small non-negative integers (bounded by the maximum
/// degree plus one), so the maximum value can never collide.
pub const UNCOLORED: u32 = u32::MAX;

/// Final color assignment for a graph, plus engine bookkeeping.
///
/// Not meaningful until the producing engine terminates; at termination
/// every slot holds a real color and [`validate`](Self::validate) returns 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoringSolution {
    /// Color per compressed vertex index (`UNCOLORED` = unassigned)
    pub colors: Vec<u32>,

    /// Number of speculate/repair rounds the engine executed
    /// (1 for the sequential baseline, 0 for an empty graph)
    pub rounds: usize,
}

impl ColoringSolution {
    /// Creates a fully-unassigned solution for `num_vertices` vertices.
    pub fn unassigned(num_vertices: usize) -> Self {
        Self {
            colors: vec![UNCOLORED; num_vertices],
            rounds: 0,
        }
    }

    /// Counts conflicting edges: edges `(u, v)` with `u < v` whose endpoints
    /// hold the same non-sentinel color. A valid coloring returns 0.
    pub fn validate(&self, graph: &GraphStore) -> usize {
        let mut conflicts = 0;
        for (u, neighbors) in graph.adjacency().iter().enumerate() {
            for &v in neighbors {
                if u < v && self.colors[u] != UNCOLORED && self.colors[u] == self.colors[v] {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// True when every vertex holds a non-sentinel color.
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|&c| c != UNCOLORED)
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> usize {
        self.colors
            .iter()
            .filter(|&&c| c != UNCOLORED)
            .collect::<HashSet<_>>()
            .len()
    }
}
