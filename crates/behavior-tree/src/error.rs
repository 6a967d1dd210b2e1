//! Errors raised while assembling or ticking a tree.

use std::borrow::Cow;

use crate::{NodeId, Status};

/// Errors surfaced by [`BehaviorTree`](crate::BehaviorTree) updates.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TickError {
    /// Update reached a node that already settled on a terminal status.
    ///
    /// Recover by calling `init_node` on the node (or an ancestor whose
    /// cascade reaches it) before the next update.
    #[error("node {node} ({label}) updated after settling on {status} without an intervening init")]
    TerminalUpdate {
        node: NodeId,
        label: Cow<'static, str>,
        status: Status,
    },

    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),
}

/// Errors surfaced by [`TreeBuilder::build`](crate::TreeBuilder::build).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("root {0} was never allocated by this builder")]
    UnknownRoot(NodeId),

    #[error("node {parent} references unallocated child {child}")]
    UnknownChild { parent: NodeId, child: NodeId },

    #[error("node {child} is owned by both {first} and {second}")]
    SharedChild {
        child: NodeId,
        first: NodeId,
        second: NodeId,
    },

    #[error("root {root} is a child of {parent}")]
    RootHasParent { root: NodeId, parent: NodeId },

    #[error("composite {0} has no children")]
    EmptyComposite(NodeId),

    #[error("node {0} is not reachable from the root")]
    Detached(NodeId),
}
