use behavior_tree::{Behavior, BehaviorTree, Status, TickError, TreeBuilder};

#[derive(Default)]
struct Blackboard {
    ticks: u32,
    inits: u32,
}

/// Plays back a fixed script of statuses, cycling when it runs out.
struct Script {
    steps: Vec<Status>,
    cursor: usize,
}

impl Script {
    fn new(steps: &[Status]) -> Self {
        Self {
            steps: steps.to_vec(),
            cursor: 0,
        }
    }
}

impl Behavior<Blackboard> for Script {
    fn tick(&mut self, ctx: &mut Blackboard) -> Status {
        ctx.ticks += 1;
        let status = self.steps[self.cursor % self.steps.len()];
        self.cursor += 1;
        status
    }
}

/// Succeeds a fixed number of times, then fails. Counts its inits on the
/// blackboard.
struct SucceedTimes {
    remaining: u32,
    inits: u32,
}

impl Behavior<Blackboard> for SucceedTimes {
    fn init(&mut self) {
        self.inits += 1;
    }

    fn tick(&mut self, ctx: &mut Blackboard) -> Status {
        ctx.inits = self.inits;
        if self.remaining == 0 {
            Status::Failure
        } else {
            self.remaining -= 1;
            Status::Success
        }
    }
}

fn single_decorator(
    wrap: impl FnOnce(&mut TreeBuilder<Blackboard>, behavior_tree::NodeId) -> behavior_tree::NodeId,
    steps: &[Status],
) -> BehaviorTree<Blackboard> {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let leaf = builder.action("script", Script::new(steps));
    let root = wrap(&mut builder, leaf);
    builder.build(root).unwrap()
}

fn sequence_of(steps: &[&[Status]]) -> BehaviorTree<Blackboard> {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let children: Vec<_> = steps
        .iter()
        .enumerate()
        .map(|(i, script)| builder.action(format!("child-{i}"), Script::new(script)))
        .collect();
    let root = builder.sequence(children);
    builder.build(root).unwrap()
}

fn assert_violation(result: Result<Status, TickError>) {
    assert!(
        matches!(result, Err(TickError::TerminalUpdate { .. })),
        "expected a terminal-update violation, got {result:?}"
    );
}

#[test]
fn inverter_swaps_terminal_results() {
    let mut bb = Blackboard::default();

    let mut tree = single_decorator(|b, c| b.inverter(c), &[Status::Success]);
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Failure);
    assert_violation(tree.update(&mut bb));

    let mut tree = single_decorator(|b, c| b.inverter(c), &[Status::Failure]);
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
    assert_violation(tree.update(&mut bb));
}

#[test]
fn inverter_passes_running_repeatably() {
    let mut bb = Blackboard::default();
    let mut tree = single_decorator(|b, c| b.inverter(c), &[Status::Running]);

    for _ in 0..5 {
        assert_eq!(tree.update(&mut bb).unwrap(), Status::Running);
    }
    assert_eq!(bb.ticks, 5);
}

#[test]
fn succeeder_coerces_failure() {
    let mut bb = Blackboard::default();

    let mut tree = single_decorator(|b, c| b.succeeder(c), &[Status::Failure]);
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);

    let mut tree = single_decorator(|b, c| b.succeeder(c), &[Status::Running]);
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Running);
}

#[test]
fn repeater_never_settles_terminal() {
    let mut bb = Blackboard::default();
    let mut tree = single_decorator(
        |b, c| b.repeater(c),
        &[Status::Running, Status::Running, Status::Success],
    );

    for tick in 0..300 {
        let reported = tree.update(&mut bb).unwrap();
        let expected = if tick % 3 == 2 {
            Status::Success
        } else {
            Status::Running
        };
        assert_eq!(reported, expected, "tick {tick}");
        assert!(!tree.root_status().is_terminal());
    }
}

#[test]
fn repeat_until_fail_reports_completion_once() {
    const SUCCESSES: u32 = 4;

    let mut builder = TreeBuilder::<Blackboard>::new();
    let leaf = builder.action(
        "flaky",
        SucceedTimes {
            remaining: SUCCESSES,
            inits: 0,
        },
    );
    let root = builder.repeat_until_fail(leaf);
    let mut tree = builder.build(root).unwrap();
    let mut bb = Blackboard::default();

    for round in 1..=SUCCESSES {
        assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
        assert_eq!(tree.root_status(), Status::Running);
        // Lazy init on the first tick, then one rewind per success.
        assert_eq!(bb.inits, round);
        assert_eq!(tree.status(leaf), Some(Status::Running));
    }

    // The failing tick still reports success, and latches.
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
    assert_eq!(tree.root_status(), Status::Success);
    assert_violation(tree.update(&mut bb));

    tree.init();
    assert_eq!(tree.status(leaf), Some(Status::Init));
}

#[test]
fn repeat_until_fail_passes_running_through() {
    let mut bb = Blackboard::default();
    let mut tree = single_decorator(
        |b, c| b.repeat_until_fail(c),
        &[Status::Running, Status::Running, Status::Running, Status::Failure],
    );

    for _ in 0..3 {
        assert_eq!(tree.update(&mut bb).unwrap(), Status::Running);
        assert_eq!(tree.root_status(), Status::Running);
    }

    assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
    assert_eq!(tree.root_status(), Status::Success);
    assert_violation(tree.update(&mut bb));
    assert_eq!(bb.ticks, 4);
}

#[test]
fn sequence_all_success_then_violation() {
    let mut bb = Blackboard::default();
    let mut tree = sequence_of(&[&[Status::Success], &[Status::Success]]);

    assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
    assert_violation(tree.update(&mut bb));

    tree.init();
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
}

#[test]
fn sequence_short_circuits_on_failure() {
    let mut bb = Blackboard::default();
    let mut tree = sequence_of(&[&[Status::Success], &[Status::Failure], &[Status::Success]]);

    assert_eq!(tree.update(&mut bb).unwrap(), Status::Failure);
    assert_eq!(bb.ticks, 2); // Third child never evaluated
}

#[test]
fn sequence_running_is_repeatable() {
    let mut bb = Blackboard::default();
    let mut tree = sequence_of(&[&[Status::Success], &[Status::Running]]);

    for _ in 0..10 {
        assert_eq!(tree.update(&mut bb).unwrap(), Status::Running);
    }
    // Every tick restarts from the first child.
    assert_eq!(bb.ticks, 20);
}

#[test]
fn selector_returns_first_non_failure() {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let fail = builder.action("fail", Script::new(&[Status::Failure]));
    let run = builder.action("run", Script::new(&[Status::Running]));
    let never = builder.action("never", Script::new(&[Status::Success]));
    let root = builder.selector(vec![fail, run, never]);
    let mut tree = builder.build(root).unwrap();
    let mut bb = Blackboard::default();

    assert_eq!(tree.update(&mut bb).unwrap(), Status::Running);
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Running);
    assert_eq!(tree.status(never), Some(Status::Init));
}

#[test]
fn selector_all_failures_fail() {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let a = builder.action("a", Script::new(&[Status::Failure]));
    let b = builder.action("b", Script::new(&[Status::Failure]));
    let root = builder.selector(vec![a, b]);
    let mut tree = builder.build(root).unwrap();

    assert_eq!(tree.update(&mut Blackboard::default()).unwrap(), Status::Failure);
}

#[test]
fn selector_stops_on_error() {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let fail = builder.action("fail", Script::new(&[Status::Failure]));
    let fault = builder.action("fault", Script::new(&[Status::Error]));
    let never = builder.action("never", Script::new(&[Status::Success]));
    let root = builder.selector(vec![fail, fault, never]);
    let mut tree = builder.build(root).unwrap();
    let mut bb = Blackboard::default();

    assert_eq!(tree.update(&mut bb).unwrap(), Status::Error);
    assert_eq!(tree.root_status(), Status::Error);
    assert_eq!(tree.status(never), Some(Status::Init));
    assert_eq!(bb.ticks, 2);
    assert_violation(tree.update(&mut bb));
}

#[test]
fn violation_in_subtree_propagates() {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let leaf = builder.action("once", Script::new(&[Status::Success]));
    let inverter = builder.inverter(leaf);
    let mut tree = builder.build(inverter).unwrap();
    let mut bb = Blackboard::default();

    assert_eq!(tree.update(&mut bb).unwrap(), Status::Failure);

    // Re-init only the inverter: the leaf is reset by the cascade.
    tree.init_node(inverter).unwrap();
    assert_eq!(tree.update(&mut bb).unwrap(), Status::Failure);

    // Ticking the leaf behind the decorator's back leaves it settled when
    // the decorator next reaches it.
    tree.init_node(inverter).unwrap();
    tree.update_node(leaf, &mut bb).unwrap();
    let err = tree.update_node(inverter, &mut bb).unwrap_err();
    assert!(matches!(err, TickError::TerminalUpdate { node, .. } if node == leaf));
    assert_eq!(tree.status(inverter), Some(Status::Running));
}

#[test]
fn closures_read_and_write_context() {
    let mut builder = TreeBuilder::<Blackboard>::new();
    let below = builder.action_fn("below-three", |bb: &mut Blackboard| {
        if bb.ticks < 3 {
            Status::Success
        } else {
            Status::Failure
        }
    });
    let bump = builder.action_fn("bump", |bb: &mut Blackboard| {
        bb.ticks += 1;
        Status::Success
    });
    let step = builder.sequence(vec![below, bump]);
    let root = builder.repeat_until_fail(step);
    let mut tree = builder.build(root).unwrap();
    let mut bb = Blackboard::default();

    let mut reported = 0;
    while tree.root_status() != Status::Success {
        assert_eq!(tree.update(&mut bb).unwrap(), Status::Success);
        reported += 1;
    }
    assert_eq!(bb.ticks, 3);
    assert_eq!(reported, 4);
}
