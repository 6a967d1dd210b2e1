//! Arena-backed behavior tree.
//!
//! A [`BehaviorTree`] owns every node in one contiguous store. Decorators and
//! composites refer to their children by [`NodeId`], so init cascades and
//! status inspection are plain index operations.
//!
//! # Update contract
//!
//! Every update of a node goes through the same steps:
//!
//! 1. The node's [`NodeState`] guard rejects the update if the node already
//!    settled on a terminal status.
//! 2. A node still in `Init` runs its own init: it becomes `Running` and its
//!    direct children are forced back to `Init` (one level; grandchildren are
//!    reset when their own parent inits).
//! 3. The node's policy runs and the node settles on its new status.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::node::Node;
use crate::state::{Entry, NodeState};
use crate::{Composite, Decorator, DecoratorStep, NodeId, NodeKind, Status, TickError};

/// Owned tree of behavior nodes evaluated against a context `C`.
pub struct BehaviorTree<C> {
    nodes: Vec<Node<C>>,
    states: Vec<NodeState>,
    root: NodeId,
}

/// What an update does once the guard and init have run.
enum Plan {
    Leaf(Status),
    Decorate(Decorator, NodeId),
    Compose(Composite),
}

impl<C> BehaviorTree<C> {
    /// Assembles a tree from validated parts. See [`crate::TreeBuilder`].
    pub(crate) fn from_parts(nodes: Vec<Node<C>>, root: NodeId) -> Self {
        let states = vec![NodeState::new(); nodes.len()];
        Self {
            nodes,
            states,
            root,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes owned by the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Current status of a node, or `None` for an id outside this tree.
    pub fn status(&self, id: NodeId) -> Option<Status> {
        self.states.get(id.index()).map(|state| state.status())
    }

    /// Current status of the root node.
    pub fn root_status(&self) -> Status {
        self.states[self.root.index()].status()
    }

    /// What kind of node `id` is, or `None` for an id outside this tree.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind<'_>> {
        self.nodes.get(id.index()).map(Node::kind)
    }

    /// Children of a node in evaluation order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.index()).map(Node::children).unwrap_or_default()
    }

    /// Ticks the whole tree once.
    pub fn update(&mut self, ctx: &mut C) -> Result<Status, TickError> {
        self.update_node(self.root, ctx)
    }

    /// Restarts the whole tree from the root.
    pub fn init(&mut self) {
        self.start(self.root);
    }

    /// Runs a node's init: the node becomes `Running` and its direct children
    /// are forced to `Init`.
    ///
    /// This is the only way to make a terminal node updatable again.
    pub fn init_node(&mut self, id: NodeId) -> Result<(), TickError> {
        self.check(id)?;
        self.start(id);
        Ok(())
    }

    /// Updates a single node (and, through its policy, its subtree).
    ///
    /// Returns the status the node reports for this tick. That is usually the
    /// status it settles on, except for `Repeater` (reports the child's
    /// result, settles `Init`) and `RepeatUntilFail` while its child keeps
    /// succeeding (reports `Success`, stays `Running`).
    ///
    /// # Errors
    ///
    /// [`TickError::TerminalUpdate`] if this node, or any node the policy
    /// reaches, already settled on a terminal status.
    pub fn update_node(&mut self, id: NodeId, ctx: &mut C) -> Result<Status, TickError> {
        let index = self.check(id)?;

        match self.states[index].enter() {
            Ok(Entry::Fresh) => self.start(id),
            Ok(Entry::Resume) => {}
            Err(status) => {
                let label = self.nodes[index].label();
                debug!(node = %id, %label, %status, "update on terminal node");
                return Err(TickError::TerminalUpdate {
                    node: id,
                    label,
                    status,
                });
            }
        }

        let plan = match &mut self.nodes[index] {
            Node::Action { behavior, .. } => Plan::Leaf(behavior.tick(ctx)),
            Node::Decorator { decorator, child } => Plan::Decorate(*decorator, *child),
            Node::Composite { composite, .. } => Plan::Compose(*composite),
        };

        let (reported, settled) = match plan {
            Plan::Leaf(status) => (status, status),
            Plan::Decorate(decorator, child) => {
                let step = decorator.resolve(self.update_node(child, ctx)?);
                if step == DecoratorStep::Rewind {
                    self.start(child);
                }
                (step.reported(), step.settled())
            }
            Plan::Compose(composite) => {
                let status = self.run_pass(id, composite, ctx)?;
                (status, status)
            }
        };

        self.states[index].settle(settled);
        trace!(node = %id, kind = %self.nodes[index].kind(), %reported, %settled, "tick");
        Ok(reported)
    }

    /// One left-to-right pass over a composite's children.
    fn run_pass(
        &mut self,
        id: NodeId,
        composite: Composite,
        ctx: &mut C,
    ) -> Result<Status, TickError> {
        self.rearm_settled_children(id);

        let mut position = 0;
        while let Some(child) = self.nodes[id.index()].children().get(position).copied() {
            if let ControlFlow::Break(status) = composite.resolve(self.update_node(child, ctx)?) {
                return Ok(status);
            }
            position += 1;
        }
        Ok(composite.passing())
    }

    /// Children that finished on an earlier pass are evaluated again from
    /// scratch on this one.
    fn rearm_settled_children(&mut self, id: NodeId) {
        for child in self.nodes[id.index()].children() {
            let state = &mut self.states[child.index()];
            if state.status().is_terminal() {
                state.reset();
            }
        }
    }

    fn start(&mut self, id: NodeId) {
        let index = id.index();
        self.states[index].start();
        match &mut self.nodes[index] {
            Node::Action { behavior, .. } => behavior.init(),
            node => {
                for child in node.children() {
                    self.states[child.index()].reset();
                }
            }
        }
        debug!(node = %id, kind = %self.nodes[index].kind(), "init");
    }

    fn check(&self, id: NodeId) -> Result<usize, TickError> {
        let index = id.index();
        if index < self.nodes.len() {
            Ok(index)
        } else {
            Err(TickError::UnknownNode(id))
        }
    }
}
