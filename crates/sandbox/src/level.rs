//! Walled grid levels and their navigation graphs.
//!
//! Every fourth column is a wall with a single gap, alternating between the
//! bottom and the top row, so routes across the level have to snake.

use std::fmt;

use nav_graph::{Graph, GraphError, NodeIndex};
use tracing::debug;

const WALL_STRIDE: usize = 4;

/// Largest accepted width or height.
pub const MAX_SIDE: usize = 1024;

/// Clamps a requested width or height into `1..=MAX_SIDE`.
pub fn clamp_side(side: usize) -> usize {
    side.clamp(1, MAX_SIDE)
}

/// Grid coordinate, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Wall layout of a `width` x `height` grid.
#[derive(Clone, Debug)]
pub struct Lattice {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Lattice {
    /// Generates the wall layout. Each dimension is clamped with
    /// [`clamp_side`].
    pub fn new(width: usize, height: usize) -> Self {
        let width = clamp_side(width);
        let height = clamp_side(height);
        let mut walls = vec![false; width * height];

        for x in (WALL_STRIDE - 1..width).step_by(WALL_STRIDE) {
            let gap = if (x / WALL_STRIDE) % 2 == 0 { height - 1 } else { 0 };
            for y in (0..height).filter(|&y| y != gap) {
                walls[y * width + x] = true;
            }
        }

        Self {
            width,
            height,
            walls,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.slot(cell).is_none_or(|slot| self.walls[slot])
    }

    /// Floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|&cell| !self.is_wall(cell))
    }

    fn slot(&self, cell: Cell) -> Option<usize> {
        (cell.x < self.width && cell.y < self.height).then_some(cell.y * self.width + cell.x)
    }
}

/// A lattice together with the graph built over its floor cells.
#[derive(Clone, Debug)]
pub struct Level {
    lattice: Lattice,
    graph: Graph,
    /// Graph node of each grid slot, `None` for walls.
    nodes: Vec<Option<NodeIndex>>,
    /// Grid cell of each graph node.
    cells: Vec<Cell>,
}

impl Level {
    /// Adds a node per floor cell (row-major) and bidirectional edges to
    /// orthogonal neighbours. With `diagonals`, diagonal neighbours are linked
    /// too, unless the move would clip a wall corner.
    pub fn build(lattice: Lattice, diagonals: bool) -> Result<Self, GraphError> {
        let mut graph = Graph::with_capacity(lattice.walls.len());
        let mut nodes = vec![None; lattice.walls.len()];
        let mut cells = Vec::with_capacity(lattice.walls.len());

        for cell in lattice.floor_cells() {
            let node = graph.add_node((cell.x as f32, cell.y as f32));
            if let Some(slot) = lattice.slot(cell) {
                nodes[slot] = Some(node);
            }
            cells.push(cell);
        }

        let orthogonal: &[(isize, isize)] = &[(1, 0), (0, 1)];
        let diagonal: &[(isize, isize)] = if diagonals { &[(1, 1), (-1, 1)] } else { &[] };

        for (from, &cell) in cells.iter().enumerate() {
            for &(dx, dy) in orthogonal.iter().chain(diagonal) {
                let Some(next) = cell.offset(dx, dy) else {
                    continue;
                };
                let clips_corner = dx != 0
                    && dy != 0
                    && (cell.offset(dx, 0).is_none_or(|c| lattice.is_wall(c))
                        || cell.offset(0, dy).is_none_or(|c| lattice.is_wall(c)));
                if clips_corner {
                    continue;
                }
                if let Some(to) = lattice.slot(next).and_then(|slot| nodes[slot]) {
                    graph.add_bidirectional_edge(from, to)?;
                }
            }
        }

        debug!(
            width = lattice.width,
            height = lattice.height,
            nodes = graph.len(),
            edges = graph.edge_count(),
            diagonals,
            "level built"
        );

        Ok(Self {
            lattice,
            graph,
            nodes,
            cells,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn cell_of(&self, node: NodeIndex) -> Option<Cell> {
        self.cells.get(node).copied()
    }

    /// Top-left and bottom-right floor cells as graph nodes.
    pub fn endpoints(&self) -> Option<(NodeIndex, NodeIndex)> {
        let last = self.cells.len().checked_sub(1)?;
        Some((0, last))
    }

    /// Draws the level one row per line: `#` wall, `.` floor, `*` path,
    /// `S`/`G` the path's ends and `@` the agent.
    pub fn render(&self, path: &[NodeIndex], agent: Option<NodeIndex>) -> String {
        let mut glyphs: Vec<char> = self
            .nodes
            .iter()
            .map(|node| if node.is_some() { '.' } else { '#' })
            .collect();

        let mut mark = |node: NodeIndex, glyph: char| {
            if let Some(slot) = self.cell_of(node).and_then(|cell| self.lattice.slot(cell)) {
                glyphs[slot] = glyph;
            }
        };
        for &node in path {
            mark(node, '*');
        }
        if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
            mark(first, 'S');
            mark(last, 'G');
        }
        if let Some(node) = agent {
            mark(node, '@');
        }

        glyphs
            .chunks(self.lattice.width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
