//! Builder for arena-backed behavior trees.
//!
//! Nodes are allocated bottom-up: leaves first, then the decorators and
//! composites that own them. Each allocation returns the [`NodeId`] the
//! parent refers to. [`TreeBuilder::build`] checks that the ids form a
//! single tree under the chosen root before handing out a [`BehaviorTree`].

use std::borrow::Cow;

use crate::behavior::action;
use crate::node::Node;
use crate::{Behavior, BehaviorTree, BuildError, Composite, Decorator, NodeId, Status};

/// Allocates nodes for a [`BehaviorTree`].
pub struct TreeBuilder<C> {
    nodes: Vec<Node<C>>,
}

impl<C: 'static> TreeBuilder<C> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates a leaf.
    pub fn action(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        behavior: impl Behavior<C> + 'static,
    ) -> NodeId {
        self.push(Node::Action {
            name: name.into(),
            behavior: Box::new(behavior),
        })
    }

    /// Allocates a leaf backed by a closure.
    ///
    /// Shorthand for `action(name, behavior::action(f))`.
    pub fn action_fn<F>(&mut self, name: impl Into<Cow<'static, str>>, f: F) -> NodeId
    where
        F: FnMut(&mut C) -> Status + Send + Sync + 'static,
    {
        self.action(name, action::<C, F>(f))
    }

    pub fn decorator(&mut self, decorator: Decorator, child: NodeId) -> NodeId {
        self.push(Node::Decorator { decorator, child })
    }

    /// Shorthand for `decorator(Decorator::Inverter, child)`.
    #[inline]
    pub fn inverter(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::Inverter, child)
    }

    /// Shorthand for `decorator(Decorator::Succeeder, child)`.
    #[inline]
    pub fn succeeder(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::Succeeder, child)
    }

    /// Shorthand for `decorator(Decorator::Repeater, child)`.
    #[inline]
    pub fn repeater(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::Repeater, child)
    }

    /// Shorthand for `decorator(Decorator::RepeatUntilFail, child)`.
    #[inline]
    pub fn repeat_until_fail(&mut self, child: NodeId) -> NodeId {
        self.decorator(Decorator::RepeatUntilFail, child)
    }

    /// Allocates a composite. `children` order is evaluation order.
    pub fn composite(&mut self, composite: Composite, children: Vec<NodeId>) -> NodeId {
        self.push(Node::Composite {
            composite,
            children,
        })
    }

    /// Shorthand for `composite(Composite::Sequence, children)`.
    #[inline]
    pub fn sequence(&mut self, children: Vec<NodeId>) -> NodeId {
        self.composite(Composite::Sequence, children)
    }

    /// Shorthand for `composite(Composite::Selector, children)`.
    #[inline]
    pub fn selector(&mut self, children: Vec<NodeId>) -> NodeId {
        self.composite(Composite::Selector, children)
    }

    /// Finishes assembly with `root` at the top.
    ///
    /// # Errors
    ///
    /// Fails unless every allocated node is owned by exactly one parent
    /// (the root by none), every child id exists, no composite is empty, and
    /// every node is reachable from the root.
    pub fn build(self, root: NodeId) -> Result<BehaviorTree<C>, BuildError> {
        let len = self.nodes.len();
        if root.index() >= len {
            return Err(BuildError::UnknownRoot(root));
        }

        let mut parents: Vec<Option<NodeId>> = vec![None; len];
        for (index, node) in self.nodes.iter().enumerate() {
            let parent = NodeId(index as u32);
            if let Node::Composite { children, .. } = node
                && children.is_empty()
            {
                return Err(BuildError::EmptyComposite(parent));
            }
            for &child in node.children() {
                let Some(slot) = parents.get_mut(child.index()) else {
                    return Err(BuildError::UnknownChild { parent, child });
                };
                if let Some(first) = *slot {
                    return Err(BuildError::SharedChild {
                        child,
                        first,
                        second: parent,
                    });
                }
                *slot = Some(parent);
            }
        }

        if let Some(parent) = parents[root.index()] {
            return Err(BuildError::RootHasParent { root, parent });
        }

        // With single ownership, anything the root cannot reach sits on a
        // separate tree or a cycle.
        let mut reached = vec![false; len];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reached[id.index()] = true;
            stack.extend_from_slice(self.nodes[id.index()].children());
        }
        if let Some(index) = reached.iter().position(|reached| !reached) {
            return Err(BuildError::Detached(NodeId(index as u32)));
        }

        Ok(BehaviorTree::from_parts(self.nodes, root))
    }

    fn push(&mut self, node: Node<C>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

impl<C: 'static> Default for TreeBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
