//! Status reported and stored by behavior nodes.

use std::fmt;

/// The lifecycle status of a behavior node.
///
/// # Terminal vs. non-terminal
///
/// - `Init` and `Running` are non-terminal: a node holding either may be
///   updated again.
/// - `Success`, `Failure` and `Error` are terminal: updating a node that
///   settled on one of them without an intervening init is a contract
///   violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The node has not started (or was rewound by its parent). The next
    /// update runs the node's init first.
    Init,

    /// The node started and has not finished yet. May be observed across
    /// any number of ticks.
    Running,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed.
    Failure,

    /// The behavior hit a fault. Passed upward unchanged; its meaning is left
    /// to the tree owner.
    Error,
}

impl Status {
    /// Returns `true` for `Success`, `Failure` and `Error`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure | Status::Error)
    }

    /// Swaps `Success` and `Failure`; every other status passes through.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    /// Lowercase name used by `Display` and log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Init => "init",
            Status::Running => "running",
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
