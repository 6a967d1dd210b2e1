//! Decorator behavior nodes.
//!
//! Decorators wrap a single child and transform the status it reports. The
//! transformation is a pure function of the child's status; the tree applies
//! the resulting [`DecoratorStep`] to the decorator (and, for a rewind, to the
//! child).

use crate::Status;

/// The closed set of single-child decorators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decorator {
    /// Swaps `Success` and `Failure`. `Running` and `Error` pass through.
    ///
    /// This is analogous to a logical NOT (!) operation.
    Inverter,

    /// Coerces every result except `Running` and `Error` to `Success`.
    ///
    /// This is useful for:
    /// - Optional behaviors that shouldn't cause a sequence to fail
    /// - Observing nodes that shouldn't affect control flow
    Succeeder,

    /// Reports the child's result but never settles terminal itself: after a
    /// `Success` or `Failure` it falls back to `Init`, so the next update
    /// re-initialises it and its child.
    Repeater,

    /// Retries every tick and reports completion exactly once, when the child
    /// finally fails.
    ///
    /// - Child `Failure`: settles `Success` (terminal).
    /// - Child `Success`: rewinds the child, reports `Success`, stays `Running`.
    /// - Anything else passes through.
    RepeatUntilFail,
}

/// What a decorator does with its child's status for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoratorStep {
    /// Report and settle on the same status.
    Settle(Status),
    /// Report `reported` but settle on `Init`.
    Rearm { reported: Status },
    /// Run the child's init, report `Success`, and stay `Running`.
    Rewind,
}

impl Decorator {
    pub const fn name(self) -> &'static str {
        match self {
            Decorator::Inverter => "Inverter",
            Decorator::Succeeder => "Succeeder",
            Decorator::Repeater => "Repeater",
            Decorator::RepeatUntilFail => "RepeatUntilFail",
        }
    }

    /// Maps the child's reported status onto this decorator's step.
    pub fn resolve(self, child: Status) -> DecoratorStep {
        match self {
            Decorator::Inverter => DecoratorStep::Settle(child.invert()),
            Decorator::Succeeder => match child {
                Status::Running | Status::Error => DecoratorStep::Settle(child),
                _ => DecoratorStep::Settle(Status::Success),
            },
            Decorator::Repeater => match child {
                Status::Success | Status::Failure => DecoratorStep::Rearm { reported: child },
                _ => DecoratorStep::Settle(child),
            },
            Decorator::RepeatUntilFail => match child {
                Status::Failure => DecoratorStep::Settle(Status::Success),
                Status::Success => DecoratorStep::Rewind,
                _ => DecoratorStep::Settle(child),
            },
        }
    }
}

impl DecoratorStep {
    /// Status handed to the parent this tick.
    pub fn reported(self) -> Status {
        match self {
            DecoratorStep::Settle(status) => status,
            DecoratorStep::Rearm { reported } => reported,
            DecoratorStep::Rewind => Status::Success,
        }
    }

    /// Status the decorator itself holds after this tick.
    pub fn settled(self) -> Status {
        match self {
            DecoratorStep::Settle(status) => status,
            DecoratorStep::Rearm { .. } => Status::Init,
            DecoratorStep::Rewind => Status::Running,
        }
    }
}
