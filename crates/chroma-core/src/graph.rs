//! Immutable graph store with id compression.
//!
//! Social-network edge lists use arbitrary (often sparse) integer user ids.
//! `GraphStore` remaps them to a dense `[0, n)` index range once at
//! construction and keeps the reverse mapping for reporting, so every
//! downstream consumer works with plain array indices.

use crate::errors::{ChromaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable, id-compressed, symmetric adjacency representation.
///
/// Built once from a raw edge list and never mutated afterwards. Vertex
/// indices are dense `[0, n)`; `original_id` recovers the input ids.
///
/// ## Invariants
/// - Adjacency is symmetric: `v ∈ neighbors(u)` iff `u ∈ neighbors(v)`.
/// - Neighbor lists are sorted and duplicate-free.
/// - The id mapping is a bijection over exactly the ids seen in the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStore {
    num_vertices: usize,
    num_edges: usize,
    adjacency: Vec<Vec<usize>>,
    /// Original id -> compressed index
    id_mapping: HashMap<i64, usize>,
    /// Compressed index -> original id
    reverse_mapping: Vec<i64>,
}

impl GraphStore {
    /// Builds a store from raw edge pairs of arbitrary integer ids.
    ///
    /// Self-loops are discarded. Duplicate edges are collapsed in the
    /// adjacency but still counted by [`edge_count`](Self::edge_count).
    /// Compressed indices are assigned in first-seen order.
    pub fn from_edges(raw_edges: &[(i64, i64)]) -> Self {
        let mut id_mapping = HashMap::new();
        let mut reverse_mapping = Vec::new();

        let mut compress = |id: i64| {
            *id_mapping.entry(id).or_insert_with(|| {
                reverse_mapping.push(id);
                reverse_mapping.len() - 1
            })
        };

        let mut compressed = Vec::with_capacity(raw_edges.len());
        for &(u_orig, v_orig) in raw_edges {
            let u = compress(u_orig);
            let v = compress(v_orig);
            compressed.push((u, v));
        }

        let num_vertices = reverse_mapping.len();
        let mut adjacency = vec![Vec::new(); num_vertices];
        let mut num_edges = 0;
        for (u, v) in compressed {
            // Skip self-loops
            if u == v {
                log::debug!("Skipping self-loop on vertex {}", u);
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u); // Undirected
            num_edges += 1;
        }

        // Deduplicate neighbors (handle duplicate edges in input)
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        log::debug!(
            "Graph built: {} vertices, {} edges",
            num_vertices,
            num_edges
        );

        Self {
            num_vertices,
            num_edges,
            adjacency,
            id_mapping,
            reverse_mapping,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    /// Number of accepted (non-self-loop) edges, counted *before* neighbor
    /// deduplication. A multi-edge in the raw input increments this count
    /// once per occurrence even though the adjacency stores it once. This
    /// matches the historical report format and is intentional.
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    /// Sorted, duplicate-free neighbors of `v`.
    ///
    /// ## Errors
    /// `ValidationError` if `v` is outside `[0, n)`.
    pub fn neighbors(&self, v: usize) -> Result<&[usize]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| self.out_of_range(v))
    }

    /// Original input id for a compressed vertex index.
    ///
    /// ## Errors
    /// `ValidationError` if `v` is outside `[0, n)`.
    pub fn original_id(&self, v: usize) -> Result<i64> {
        self.reverse_mapping
            .get(v)
            .copied()
            .ok_or_else(|| self.out_of_range(v))
    }

    /// Compressed index for an original id, if the id was seen in the input.
    pub fn compressed_id(&self, original: i64) -> Option<usize> {
        self.id_mapping.get(&original).copied()
    }

    /// Degree of `v` in the deduplicated adjacency.
    pub fn degree(&self, v: usize) -> Result<usize> {
        Ok(self.neighbors(v)?.len())
    }

    /// Graph density: `2|E| / (|V| * (|V| - 1))`.
    pub fn density(&self) -> f64 {
        if self.num_vertices <= 1 {
            return 0.0;
        }
        (2.0 * self.num_edges as f64) / (self.num_vertices * (self.num_vertices - 1)) as f64
    }

    /// Full adjacency structure, indexed by compressed vertex.
    ///
    /// Hot loops iterate this directly instead of paying the range check
    /// of [`neighbors`](Self::neighbors) per vertex.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    fn out_of_range(&self, v: usize) -> ChromaError {
        ChromaError::validation(format!(
            "Vertex index {} out of range [0, {})",
            v, self.num_vertices
        ))
    }
}
