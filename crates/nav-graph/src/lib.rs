//! Weighted 2D graph with an A* path solver.
//!
//! `nav-graph` stores positioned nodes in an append-only, index-stable
//! [`Graph`]. Edges are weighted by the Euclidean distance between their
//! endpoints, and [`Graph::calculate_path`] runs A* with the straight-line
//! distance to the destination as its heuristic. Each query records a
//! [`QueryInfo`] with the number of nodes it expanded.
//!
//! The frontier is an [`IndexedPriorityQueue`]: a binary heap with a
//! position map, so nodes already queued can have their priority lowered
//! in place during relaxation.

pub mod error;
pub mod graph;
pub mod point;
pub mod queue;
pub mod search;

pub use error::GraphError;
pub use graph::{Graph, Neighbor, Node, NodeIndex};
pub use point::Point;
pub use queue::IndexedPriorityQueue;
pub use search::QueryInfo;
