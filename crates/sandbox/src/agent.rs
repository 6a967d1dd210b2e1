//! Path-following agent driven by a behavior tree.
//!
//! The tree is `RepeatUntilFail(Sequence([HasWaypoint, StepAlongPath]))`:
//! every tick moves the agent one waypoint, and the tick that finds no
//! waypoint left completes the tree.

use behavior_tree::{Behavior, BehaviorTree, BuildError, Status, TickError, TreeBuilder};
use nav_graph::NodeIndex;
use tracing::{debug, info};

/// Blackboard shared by the agent's leaves.
#[derive(Clone, Debug, Default)]
pub struct Agent {
    path: Vec<NodeIndex>,
    cursor: usize,
    position: Option<NodeIndex>,
}

impl Agent {
    pub fn new(path: Vec<NodeIndex>) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Node the agent stands on, `None` before its first step.
    pub fn position(&self) -> Option<NodeIndex> {
        self.position
    }

    /// Waypoints visited so far.
    pub fn visited(&self) -> &[NodeIndex] {
        &self.path[..self.cursor]
    }

    pub fn next_waypoint(&self) -> Option<NodeIndex> {
        self.path.get(self.cursor).copied()
    }
}

/// Moves the agent onto its next waypoint.
#[derive(Debug, Default)]
struct StepAlongPath {
    steps: usize,
}

impl Behavior<Agent> for StepAlongPath {
    fn init(&mut self) {
        self.steps = 0;
    }

    fn tick(&mut self, agent: &mut Agent) -> Status {
        let Some(next) = agent.next_waypoint() else {
            return Status::Failure;
        };
        agent.position = Some(next);
        agent.cursor += 1;
        self.steps += 1;
        debug!(node = next, steps = self.steps, "step");
        Status::Success
    }
}

/// Builds the patrol tree over an [`Agent`] blackboard.
pub fn patrol_tree() -> Result<BehaviorTree<Agent>, BuildError> {
    let mut builder = TreeBuilder::<Agent>::new();
    let has_waypoint = builder.action_fn("HasWaypoint", |agent: &mut Agent| {
        if agent.next_waypoint().is_some() {
            Status::Success
        } else {
            Status::Failure
        }
    });
    let step = builder.action("StepAlongPath", StepAlongPath::default());
    let follow = builder.sequence(vec![has_waypoint, step]);
    let root = builder.repeat_until_fail(follow);
    builder.build(root)
}

/// How a run of the tree ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub ticks: usize,
    /// The root settled on a terminal status within the budget.
    pub completed: bool,
}

/// Ticks `tree` until its root settles or `budget` ticks have run.
pub fn run(
    tree: &mut BehaviorTree<Agent>,
    agent: &mut Agent,
    budget: usize,
) -> Result<Outcome, TickError> {
    for tick in 1..=budget {
        let reported = tree.update(agent)?;
        let settled = tree.root_status();
        debug!(tick, %reported, %settled, position = ?agent.position, "tree tick");

        if settled.is_terminal() {
            info!(tick, status = %settled, visited = agent.cursor, "agent finished");
            return Ok(Outcome {
                ticks: tick,
                completed: true,
            });
        }
    }

    info!(
        budget,
        visited = agent.cursor,
        remaining = agent.path.len() - agent.cursor,
        "tick budget exhausted"
    );
    Ok(Outcome {
        ticks: budget,
        completed: false,
    })
}
