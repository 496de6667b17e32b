//! # chroma-core
//!
//! Core types and errors for the Chroma graph coloring engine:
//! - **GraphStore**: immutable, id-compressed, symmetric adjacency
//! - **ColoringSolution**: per-vertex color assignment with validation
//! - **Edge-list parsing**: lenient whitespace-separated pair format
//! - **Errors**: unified error handling with ChromaError
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ chroma-core  │  ← graph store, solution, errors
//! └──────────────┘
//!        ▲
//!   ┌────┴─────────────┐
//!   │                  │
//! ┌─▼─────────────┐  ┌─▼─────────────┐
//! │ chroma-engine │  │ chroma-report │
//! └───────────────┘  └───────────────┘
//! ```

pub mod edgelist;
pub mod errors;
pub mod graph;
pub mod solution;

// Re-export commonly used items
pub use edgelist::load_edge_list;
pub use errors::{ChromaError, Result};
pub use graph::GraphStore;
pub use solution::{ColoringSolution, UNCOLORED};
