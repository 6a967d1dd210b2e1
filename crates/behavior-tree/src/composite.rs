//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Composite::Sequence`] (AND logic) and
//! [`Composite::Selector`] (OR logic).
//!
//! Neither composite remembers where it stopped: every tick evaluates the
//! children again from the first one.

use std::ops::ControlFlow;

use crate::Status;

/// The closed set of ordered multi-child composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    /// Executes children in order until one does not succeed.
    ///
    /// # Semantics
    ///
    /// A `Sequence` node evaluates its children from left to right:
    /// - If a child returns anything but `Success`, the sequence **stops
    ///   immediately** and returns that status
    /// - If a child returns `Success`, the sequence **continues** to the next child
    /// - If all children return `Success`, the sequence returns `Success`
    ///
    /// This is analogous to a short-circuited logical AND (&&) operation.
    Sequence,

    /// Executes children in order until one does not fail.
    ///
    /// # Semantics
    ///
    /// A `Selector` node evaluates its children from left to right:
    /// - If a child returns anything but `Failure`, the selector **stops
    ///   immediately** and returns that status
    /// - If a child returns `Failure`, the selector **continues** to the next child
    /// - If all children return `Failure`, the selector returns `Failure`
    ///
    /// This is analogous to a short-circuited logical OR (||) operation.
    Selector,
}

impl Composite {
    pub const fn name(self) -> &'static str {
        match self {
            Composite::Sequence => "Sequence",
            Composite::Selector => "Selector",
        }
    }

    /// The child status that lets evaluation move on. It is also the result
    /// when every child produced it.
    pub const fn passing(self) -> Status {
        match self {
            Composite::Sequence => Status::Success,
            Composite::Selector => Status::Failure,
        }
    }

    /// Decides whether evaluation continues after a child reported `child`.
    pub fn resolve(self, child: Status) -> ControlFlow<Status> {
        if child == self.passing() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(child)
        }
    }
}
