//! Arena-backed behavior tree with an explicit per-node state machine.
//!
//! This library provides a small, deterministic behavior tree evaluator for
//! tick-driven agents. A tree is assembled once, then ticked with
//! [`BehaviorTree::update`] by its owner.
//!
//! - **Explicit lifecycle**: every node moves through `Init → Running →`
//!   terminal, guarded by [`state::NodeState`]
//! - **Terminal contract**: updating a node that settled on `Success`,
//!   `Failure` or `Error` without an init is a [`TickError`]
//! - **Arena storage**: the tree owns all nodes; parents hold [`NodeId`]s
//! - **Closed node set**: exhaustive `match` over [`Decorator`] and [`Composite`]
//!
//! # Architecture
//!
//! - [`Behavior`]: Trait for leaf actions and conditions
//! - [`Status`]: `Init`, `Running`, `Success`, `Failure`, `Error`
//! - Composite nodes: [`Composite::Sequence`], [`Composite::Selector`]
//! - Decorator nodes: [`Decorator::Inverter`], [`Decorator::Succeeder`],
//!   [`Decorator::Repeater`], [`Decorator::RepeatUntilFail`]
//! - [`TreeBuilder`]: Allocates nodes and validates ownership

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod node;
pub mod state;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, FnAction, action};
pub use builder::TreeBuilder;
pub use composite::Composite;
pub use decorator::{Decorator, DecoratorStep};
pub use error::{BuildError, TickError};
pub use node::{NodeId, NodeKind};
pub use status::Status;
pub use tree::BehaviorTree;
