//! Whitespace-separated edge-list parser.
//!
//! The SNAP-style social network dumps this engine consumes are plain text,
//! one edge per line, two whitespace-separated integer user ids. Lines
//! starting with `#` are comments. Lines that fail to parse as two integers
//! are skipped, not errored — leniency is part of the format's contract.
//!
//! ## Example
//! ```text
//! # FromNodeId  ToNodeId
//! 0 1
//! 0 2
//! 1 2
//! ```

use crate::errors::{ChromaError, Result};
use crate::graph::GraphStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses a whitespace-separated edge-list file into a [`GraphStore`].
///
/// ## Errors
/// Only I/O failures (open or read) produce an error. Malformed lines are
/// silently skipped; a file with no valid edges yields an empty store.
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<GraphStore> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| {
        ChromaError::internal(format!(
            "Failed to open edge list '{}': {}",
            path_ref.display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);

    let mut raw_edges = Vec::new();
    let mut skipped = 0usize;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| {
            ChromaError::internal(format!(
                "Failed to read line {} from '{}': {}",
                line_num + 1,
                path_ref.display(),
                e
            ))
        })?;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_pair(line) {
            Some(pair) => raw_edges.push(pair),
            None => {
                log::debug!("Skipping malformed line {}: '{}'", line_num + 1, line);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!(
            "Skipped {} malformed line(s) in '{}'",
            skipped,
            path_ref.display()
        );
    }

    let store = GraphStore::from_edges(&raw_edges);
    log::info!(
        "Loaded '{}': {} vertices, {} edges",
        path_ref.display(),
        store.vertex_count(),
        store.edge_count()
    );
    Ok(store)
}

/// Extracts the first two whitespace-separated integers from a line.
fn parse_pair(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let u = parts.next()?.parse::<i64>().ok()?;
    let v = parts.next()?.parse::<i64>().ok()?;
    Some((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Creates a temporary edge-list file with the given content
    fn create_temp_edge_list(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_parse_simple_triangle() {
        let content = "\
# Triangle graph
0 1
1 2
0 2
";
        let file = create_temp_edge_list(content);
        let store = load_edge_list(file.path()).unwrap();

        assert_eq!(store.vertex_count(), 3);
        assert_eq!(store.edge_count(), 3);
        for v in 0..3 {
            assert_eq!(store.degree(v).unwrap(), 2);
        }
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "\
# FromNodeId  ToNodeId
10 20

# trailing comment
20 30
";
        let file = create_temp_edge_list(content);
        let store = load_edge_list(file.path()).unwrap();

        assert_eq!(store.vertex_count(), 3);
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let content = "\
0 1
not an edge
2
3 four
4 5
";
        let file = create_temp_edge_list(content);
        let store = load_edge_list(file.path()).unwrap();

        // Only '0 1' and '4 5' survive
        assert_eq!(store.vertex_count(), 4);
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_parse_tab_separated_and_extra_columns() {
        let content = "0\t1\n1 2 weight=3\n";
        let file = create_temp_edge_list(content);
        let store = load_edge_list(file.path()).unwrap();

        // Extra columns are ignored; the first two integers win
        assert_eq!(store.vertex_count(), 3);
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_parse_empty_file_yields_empty_store() {
        let file = create_temp_edge_list("# only a comment\n");
        let store = load_edge_list(file.path()).unwrap();

        assert_eq!(store.vertex_count(), 0);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_parse_negative_ids() {
        let file = create_temp_edge_list("-5 3\n3 -5\n");
        let store = load_edge_list(file.path()).unwrap();

        assert_eq!(store.vertex_count(), 2);
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.neighbors(0).unwrap(), &[1]);
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = load_edge_list("/nonexistent/path/to/edges.txt");
        assert!(result.is_err());
        match result {
            Err(ChromaError::Internal(message)) => {
                assert!(message.contains("Failed to open edge list"));
            }
            other => panic!("Expected Internal error, got {:?}", other),
        }
    }
}
