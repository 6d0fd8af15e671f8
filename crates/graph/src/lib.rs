//! Weighted graph with Dijkstra shortest paths.
//!
//! The graph is an adjacency list keyed by string vertex identity
//! (the [`Identifiable`] trait). Single-source shortest paths run
//! over [`LinkedPriorityQueue`], a sorted linked queue whose FIFO
//! tie-break for equal priorities is what makes path reconstruction
//! deterministic when several shortest paths exist.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Identifiable`] vertex identity |
//! | [`queue`] | [`LinkedPriorityQueue`] |
//! | [`graph`] | [`WeightedGraph`], Dijkstra, DFS, BFS |

pub mod graph;
pub mod queue;
pub mod types;

pub use graph::{GraphError, GraphKind, WeightedGraph};
pub use queue::{LinkedPriorityQueue, QueueError};
pub use types::Identifiable;
