//! Grid sandbox binary.
//!
//! Generates a walled lattice, plans a route across it with A*, then lets a
//! behavior-tree agent walk the route one waypoint per tick.
//!
//! Configuration comes from `SANDBOX_*` environment variables (a `.env` file
//! is honoured) and can be overridden on the command line:
//!
//! ```bash
//! RUST_LOG=debug cargo run -p sandbox -- --width 24 --diagonals
//! ```

mod agent;
mod config;
mod level;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use agent::Agent;
use config::SandboxConfig;
use level::{Lattice, Level, clamp_side};

/// Walk an agent across a generated grid level
#[derive(Parser, Debug)]
#[command(name = "sandbox")]
#[command(about = "Behavior tree + A* grid sandbox", long_about = None)]
#[command(version)]
struct Cli {
    /// Level width in cells (overrides SANDBOX_WIDTH)
    #[arg(long)]
    width: Option<usize>,

    /// Level height in cells (overrides SANDBOX_HEIGHT)
    #[arg(long)]
    height: Option<usize>,

    /// Tick budget for the agent (overrides SANDBOX_TICKS)
    #[arg(long)]
    ticks: Option<usize>,

    /// Allow diagonal moves
    #[arg(long)]
    diagonals: bool,
}

impl Cli {
    fn apply(self, mut config: SandboxConfig) -> SandboxConfig {
        if let Some(width) = self.width {
            config.width = clamp_side(width);
        }
        if let Some(height) = self.height {
            config.height = clamp_side(height);
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        config.diagonals |= self.diagonals;
        config
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().apply(SandboxConfig::from_env());
    info!(
        width = config.width,
        height = config.height,
        ticks = config.ticks,
        diagonals = config.diagonals,
        "starting sandbox"
    );

    let mut level = Level::build(Lattice::new(config.width, config.height), config.diagonals)
        .context("failed to build level graph")?;
    info!(
        width = level.lattice().width(),
        height = level.lattice().height(),
        nodes = level.graph().len(),
        edges = level.graph().edge_count(),
        "level ready"
    );
    let (start, goal) = level.endpoints().context("level has no floor cells")?;

    let start_cell = level.cell_of(start).context("unknown start node")?;
    let goal_cell = level.cell_of(goal).context("unknown goal node")?;

    let path = level.graph_mut().calculate_path(start, goal);
    let query = level.graph().query_info();
    info!(
        start = %start_cell,
        goal = %goal_cell,
        waypoints = path.len(),
        cost = level.graph().path_cost(&path).unwrap_or_default(),
        nodes_traversed = query.nodes_traversed,
        "route planned"
    );

    let mut tree = agent::patrol_tree().context("failed to assemble agent tree")?;
    let mut agent = Agent::new(path.clone());
    let outcome = agent::run(&mut tree, &mut agent, config.ticks)?;

    println!("{}", level.render(&path, agent.position()));
    println!(
        "ticks: {}  completed: {}  visited: {}/{}  nodes traversed: {}",
        outcome.ticks,
        outcome.completed,
        agent.visited().len(),
        path.len(),
        query.nodes_traversed,
    );

    Ok(())
}
