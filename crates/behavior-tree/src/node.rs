//! Node identifiers and arena slots.

use std::borrow::Cow;
use std::fmt;

use crate::{Behavior, Composite, Decorator};

/// Dense index of a node inside one tree's arena.
///
/// Ids are only meaningful for the builder (and tree) that allocated them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena entry. Parents hold child ids, never references.
pub(crate) enum Node<C> {
    Action {
        name: Cow<'static, str>,
        behavior: Box<dyn Behavior<C>>,
    },
    Decorator {
        decorator: Decorator,
        child: NodeId,
    },
    Composite {
        composite: Composite,
        children: Vec<NodeId>,
    },
}

impl<C> Node<C> {
    pub(crate) fn kind(&self) -> NodeKind<'_> {
        match self {
            Node::Action { name, .. } => NodeKind::Action(name),
            Node::Decorator { decorator, .. } => NodeKind::Decorator(*decorator),
            Node::Composite { composite, .. } => NodeKind::Composite(*composite),
        }
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match self {
            Node::Action { .. } => &[],
            Node::Decorator { child, .. } => std::slice::from_ref(child),
            Node::Composite { children, .. } => children,
        }
    }

    pub(crate) fn label(&self) -> Cow<'static, str> {
        match self {
            Node::Action { name, .. } => name.clone(),
            Node::Decorator { decorator, .. } => Cow::Borrowed(decorator.name()),
            Node::Composite { composite, .. } => Cow::Borrowed(composite.name()),
        }
    }
}

/// Read-only view of what a node is, for inspection and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Action(&'a str),
    Decorator(Decorator),
    Composite(Composite),
}

impl fmt::Display for NodeKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Action(name) => write!(f, "action `{name}`"),
            NodeKind::Decorator(decorator) => f.write_str(decorator.name()),
            NodeKind::Composite(composite) => f.write_str(composite.name()),
        }
    }
}
