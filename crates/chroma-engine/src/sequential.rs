//! Sequential greedy baseline.

use chroma_core::{ColoringSolution, GraphStore, UNCOLORED};

/// Colors vertices in index order, assigning each the smallest color not
/// used by an already-colored neighbor.
///
/// Single-threaded; serves as the speedup baseline for the speculative
/// engine and as a differential oracle in tests. Uses at most
/// `max_degree + 1` colors.
pub fn sequential_greedy(graph: &GraphStore) -> ColoringSolution {
    let n = graph.vertex_count();
    if n == 0 {
        return ColoringSolution::unassigned(0);
    }

    let adjacency = graph.adjacency();
    let mut colors = vec![UNCOLORED; n];

    for u in 0..n {
        let neighbors = &adjacency[u];
        let mut used = vec![false; neighbors.len() + 1];
        for &v in neighbors {
            let c = colors[v];
            if c != UNCOLORED && (c as usize) < used.len() {
                used[c as usize] = true;
            }
        }

        let chosen = used
            .iter()
            .position(|&taken| !taken)
            .unwrap_or(neighbors.len());
        colors[u] = chosen as u32;
    }

    ColoringSolution { colors, rounds: 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let graph = GraphStore::from_edges(&[(0, 1), (1, 2), (0, 2)]);
        let solution = sequential_greedy(&graph);

        assert_eq!(solution.validate(&graph), 0);
        assert_eq!(solution.color_count(), 3);
    }

    #[test]
    fn test_path_two_colors() {
        let graph = GraphStore::from_edges(&[(0, 1), (1, 2), (2, 3)]);
        let solution = sequential_greedy(&graph);

        assert_eq!(solution.validate(&graph), 0);
        assert!(solution.color_count() <= 2);
    }

    #[test]
    fn test_deterministic_in_vertex_order() {
        let graph = GraphStore::from_edges(&[(0, 1), (1, 2), (0, 2), (2, 3)]);
        let a = sequential_greedy(&graph);
        let b = sequential_greedy(&graph);

        assert_eq!(a.colors, b.colors);
        // Vertex 0 has no colored neighbors when visited
        assert_eq!(a.colors[0], 0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphStore::from_edges(&[]);
        let solution = sequential_greedy(&graph);

        assert!(solution.colors.is_empty());
        assert_eq!(solution.rounds, 0);
    }

    #[test]
    fn test_color_bound_by_max_degree() {
        // Star: max degree 5, greedy must stay within 6 colors (uses 2)
        let graph = GraphStore::from_edges(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        let solution = sequential_greedy(&graph);

        assert_eq!(solution.validate(&graph), 0);
        assert_eq!(solution.color_count(), 2);
    }
}
