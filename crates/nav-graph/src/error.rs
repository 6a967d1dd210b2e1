//! Errors raised while populating a [`Graph`](crate::Graph).

use crate::NodeIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint does not name an existing node. The graph is left
    /// unchanged.
    #[error("node index {index} out of range for graph with {len} nodes")]
    NodeOutOfRange { index: NodeIndex, len: usize },
}
