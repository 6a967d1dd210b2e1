//! Per-node state machine.
//!
//! Every node in a tree owns one [`NodeState`]. All status transitions go
//! through it, so the "no update on a terminal node" contract is checked in
//! exactly one place:
//!
//! ```text
//!            reset (parent init)            start (own init)
//!   any ──────────────────────────▶ Init ───────────────────▶ Running
//!                                                               │
//!                                           settle(status)      ▼
//!                                   Init/Running/Success/Failure/Error
//! ```
//!
//! [`NodeState::enter`] is the guard run at the top of every update.

use crate::Status;

/// How an update may proceed after passing the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// The node holds `Init`; its init must run before the policy.
    Fresh,
    /// The node holds `Running`; the policy runs directly.
    Resume,
}

/// Guarded status cell for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    status: Status,
}

impl NodeState {
    pub const fn new() -> Self {
        Self {
            status: Status::Init,
        }
    }

    #[inline]
    pub fn status(self) -> Status {
        self.status
    }

    /// Checks whether an update is allowed.
    ///
    /// Returns the terminal status as the error when the node already
    /// settled and nobody re-initialised it.
    pub fn enter(self) -> Result<Entry, Status> {
        match self.status {
            Status::Init => Ok(Entry::Fresh),
            Status::Running => Ok(Entry::Resume),
            terminal => Err(terminal),
        }
    }

    /// The node's own init: it is now running.
    #[inline]
    pub fn start(&mut self) {
        self.status = Status::Running;
    }

    /// Forced back to `Init` by the parent's init cascade.
    #[inline]
    pub fn reset(&mut self) {
        self.status = Status::Init;
    }

    /// Records the status the node settles on at the end of an update.
    #[inline]
    pub fn settle(&mut self, status: Status) {
        self.status = status;
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new()
    }
}
