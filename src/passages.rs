//! Undirected graph of open passages between cells

use petgraph::algo::{astar, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::grid::{Cell, Grid};

/// Passages of a maze, stored as a graph where node index equals cell id.
///
/// Nodes are created on demand, when an edge first touches them (or a
/// lower id). Cells beyond the populated range have no passages.
#[derive(Clone, Debug)]
pub struct PassageGraph {
    grid: Grid,
    /// Node weights are the cells themselves
    graph: UnGraph<Cell, ()>,
}

impl PassageGraph {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            graph: UnGraph::default(),
        }
    }

    /// Get node index for `cell`, creating nodes up to and including it.
    pub fn touch(&mut self, cell: Cell) -> NodeIndex {
        let id = self.grid.id(cell);
        while self.graph.node_count() <= id {
            let next = self.grid.cell(self.graph.node_count());
            self.graph.add_node(next);
        }
        NodeIndex::new(id)
    }

    /// Open the wall between two adjacent cells. Carving twice is a no-op.
    pub fn carve(&mut self, a: Cell, b: Cell) {
        debug_assert!(
            self.grid.adjacent(a).any(|c| c == b),
            "{} and {} are not adjacent",
            a,
            b
        );
        let node_a = self.touch(a);
        let node_b = self.touch(b);
        self.graph.update_edge(node_a, node_b, ());
    }

    /// Node of an in-bounds, populated cell
    fn node(&self, cell: Cell) -> Option<NodeIndex> {
        if !self.grid.contains(cell) {
            return None;
        }
        let id = self.grid.id(cell);
        (id < self.graph.node_count()).then(|| NodeIndex::new(id))
    }

    /// Is there an open passage between `a` and `b`?
    pub fn can_pass(&self, a: Cell, b: Cell) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Number of populated node ids
    pub fn populated(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All passages as cell pairs, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()], self.graph[edge.target()]))
    }

    /// Cells directly connected to `cell`
    pub fn passages_from(&self, cell: Cell) -> Vec<Cell> {
        match self.node(cell) {
            Some(node) => self.graph.neighbors(node).map(|n| self.graph[n]).collect(),
            None => Vec::new(),
        }
    }

    /// Shortest path lengths (in passages) from `origin` to every node.
    ///
    /// Indexed by cell id; `None` marks unreachable nodes. Returns `None`
    /// altogether if `origin` is not populated yet.
    pub fn distances_from(&self, origin: Cell) -> Option<Vec<Option<usize>>> {
        let start = self.node(origin)?;
        let found = dijkstra(&self.graph, start, None, |_| 1usize);
        let mut dists = vec![None; self.graph.node_count()];
        for (node, dist) in found {
            dists[node.index()] = Some(dist);
        }
        Some(dists)
    }

    /// Shortest path from `from` to `to`, both ends included
    pub fn shortest_path(&self, from: Cell, to: Cell) -> Option<Vec<Cell>> {
        let start = self.node(from)?;
        let goal = self.node(to)?;
        let (_, nodes) = astar(&self.graph, start, |n| n == goal, |_| 1usize, |_| 0)?;
        Some(nodes.into_iter().map(|n| self.graph[n]).collect())
    }
}
