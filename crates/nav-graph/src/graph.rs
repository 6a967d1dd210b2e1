//! Indexed node store with weighted adjacency.
//!
//! Nodes are appended and never removed (except by [`Graph::clear`]), so a
//! [`NodeIndex`] stays valid for the graph's lifetime. Edge weights are
//! always the Euclidean distance between the endpoints at the moment the
//! edge is added, which keeps the straight-line heuristic used by
//! [`Graph::calculate_path`] admissible.

use tracing::debug;

use crate::{GraphError, Point, QueryInfo};

/// Dense 0-based index of a node.
pub type NodeIndex = usize;

/// Outgoing edge stored on its source node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub node: NodeIndex,
    pub weight: f32,
}

/// A positioned node and its outgoing edges, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Point,
    pub neighbors: Vec<Neighbor>,
}

impl Node {
    fn new(position: Point) -> Self {
        Self {
            position,
            neighbors: Vec::new(),
        }
    }
}

/// Weighted directed graph over 2D points.
///
/// Bidirectional connections are stored as two directed edges. Parallel
/// edges are kept as-is.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) last_query: QueryInfo,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            last_query: QueryInfo::default(),
        }
    }

    /// Appends a node and returns its index.
    pub fn add_node(&mut self, position: impl Into<Point>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new(position.into()));
        index
    }

    /// Adds a directed edge `from → to` weighted by the current distance
    /// between the two nodes.
    pub fn add_neighbor_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
    ) -> Result<(), GraphError> {
        self.connect(from, to, false)
    }

    /// Adds `a → b` and `b → a` with the same weight.
    pub fn add_bidirectional_edge(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
    ) -> Result<(), GraphError> {
        self.connect(a, b, true)
    }

    fn connect(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        bidirectional: bool,
    ) -> Result<(), GraphError> {
        let weight = self.position(from)?.distance(self.position(to)?);
        self.nodes[from].neighbors.push(Neighbor { node: to, weight });
        if bidirectional {
            self.nodes[to].neighbors.push(Neighbor { node: from, weight });
        }
        Ok(())
    }

    /// Removes every node and edge. Indices handed out earlier become invalid.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), "clearing graph");
        self.nodes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.neighbors.len()).sum()
    }

    #[inline]
    pub fn contains(&self, index: NodeIndex) -> bool {
        index < self.nodes.len()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn position(&self, index: NodeIndex) -> Result<Point, GraphError> {
        self.nodes
            .get(index)
            .map(|node| node.position)
            .ok_or(GraphError::NodeOutOfRange {
                index,
                len: self.nodes.len(),
            })
    }

    /// Outgoing edges of `index`, empty for an unknown node.
    pub fn neighbors(&self, index: NodeIndex) -> &[Neighbor] {
        self.nodes
            .get(index)
            .map(|node| node.neighbors.as_slice())
            .unwrap_or_default()
    }

    /// Sum of edge weights along `path`, taking the lightest edge between
    /// consecutive nodes. `None` if two consecutive nodes are not connected.
    ///
    /// An empty or single-node path costs nothing.
    pub fn path_cost(&self, path: &[NodeIndex]) -> Option<f32> {
        path.windows(2).try_fold(0.0, |total, pair| {
            self.neighbors(pair[0])
                .iter()
                .filter(|neighbor| neighbor.node == pair[1])
                .map(|neighbor| neighbor.weight)
                .min_by(f32::total_cmp)
                .map(|weight| total + weight)
        })
    }
}
