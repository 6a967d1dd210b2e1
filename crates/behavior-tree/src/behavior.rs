//! Leaf behavior trait.
//!
//! This module defines the [`Behavior`] trait implemented by leaf actions and
//! conditions. The trait is generic over a context type `C`, allowing leaves
//! to read and modify agent state while the tree itself owns status tracking.

use crate::Status;

/// A leaf node that can be evaluated against a context.
///
/// Leaves never see the terminal-update guard: the tree checks it before
/// calling [`Behavior::tick`], so a leaf only runs while its node is live.
pub trait Behavior<C>: Send + Sync {
    /// Called every time the leaf's node runs its own init, either lazily at
    /// the first update after a reset or through an explicit
    /// `init_node` call.
    fn init(&mut self) {}

    /// Evaluate this leaf against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Leaves can read
    ///   agent state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// The status the leaf settles on for this tick. `Running` keeps the
    /// leaf live; any terminal status requires an init before the next tick.
    fn tick(&mut self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to be handed to the builder as-is.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn init(&mut self) {
        (**self).init();
    }

    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Adapts a closure into a [`Behavior`].
///
/// Created through [`action`]. The closure has no init hook.
pub struct FnAction<F> {
    f: F,
}

/// Wraps a closure so it can be used as a leaf.
pub fn action<C, F>(f: F) -> FnAction<F>
where
    F: FnMut(&mut C) -> Status + Send + Sync,
{
    FnAction { f }
}

impl<C, F> Behavior<C> for FnAction<F>
where
    F: FnMut(&mut C) -> Status + Send + Sync,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.f)(ctx)
    }
}
