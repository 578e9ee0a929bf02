//! Maze generation

use std::collections::HashMap;

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{Cell, Grid};
use crate::passages::PassageGraph;
use crate::Maze;

/// Visited cells that may still grow new passages.
///
/// Backed by a vector for uniform random picks and a position index for
/// constant time removal.
#[derive(Default)]
struct Extendable {
    cells: Vec<Cell>,
    positions: HashMap<Cell, usize>,
}

impl Extendable {
    fn insert(&mut self, cell: Cell) {
        if !self.positions.contains_key(&cell) {
            self.positions.insert(cell, self.cells.len());
            self.cells.push(cell);
        }
    }

    fn remove(&mut self, cell: Cell) {
        if let Some(pos) = self.positions.remove(&cell) {
            self.cells.swap_remove(pos);
            if let Some(moved) = self.cells.get(pos) {
                self.positions.insert(*moved, pos);
            }
        }
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn choose(&self, random: &mut StdRng) -> Option<Cell> {
        if self.cells.is_empty() {
            return None;
        }
        Some(self.cells[random.gen_range(0..self.cells.len())])
    }
}

/// Generator of perfect mazes
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a `size`×`size` maze and select its exit.
    ///
    /// Lines are grown from randomly chosen seed cells until no visited
    /// cell has unvisited neighbors left. Only unvisited cells are ever
    /// connected, so the passages form a spanning tree.
    ///
    /// A zero size gives an empty, uncarved maze.
    pub fn generate(&mut self, size: usize) -> Maze {
        let grid = Grid::new(size);
        if grid.is_empty() {
            return Maze::new(size);
        }
        let mut carver = Carver::new(grid, &mut self.random);
        carver.run();
        Maze::from_passages(grid, carver.passages)
    }
}

/// Transient state of a single generation run
struct Carver<'a> {
    grid: Grid,
    random: &'a mut StdRng,
    passages: PassageGraph,
    /// Indexed by cell id
    visited: Vec<bool>,
    extendable: Extendable,
}

impl<'a> Carver<'a> {
    fn new(grid: Grid, random: &'a mut StdRng) -> Self {
        let mut passages = PassageGraph::new(grid);
        passages.touch(Maze::ORIGIN);
        let mut visited = vec![false; grid.len()];
        visited[grid.id(Maze::ORIGIN)] = true;
        let mut extendable = Extendable::default();
        extendable.insert(Maze::ORIGIN);
        Self {
            grid,
            random,
            passages,
            visited,
            extendable,
        }
    }

    fn run(&mut self) {
        let mut iter = 0;
        while let Some(seed) = self.extendable.choose(self.random) {
            let n_extendable = self.extendable.len();
            let extended = self.extend_line(seed);
            iter += 1;
            debug!(
                "iter {} seed = {} extendables = {} extended for {}",
                iter, seed, n_extendable, extended
            );
        }
    }

    /// Pick a random unvisited neighbor of `current`.
    ///
    /// Returns the cell and the number of weighted candidates it was
    /// picked from.
    fn select_next(&mut self, current: Cell) -> Option<(Cell, usize)> {
        let candidates: Vec<Cell> = self
            .grid
            .neighbors(current)
            .into_iter()
            .filter(|n| !self.visited[self.grid.id(*n)])
            .collect();
        let next = *candidates.choose(self.random)?;
        Some((next, candidates.len()))
    }

    /// Walk from `start` into unvisited territory until stuck.
    ///
    /// The cell where the line ends is no longer extendable. Returns the
    /// number of passages carved.
    fn extend_line(&mut self, start: Cell) -> usize {
        let mut current = start;
        let mut num = 0;
        while let Some((next, n_candidates)) = self.select_next(current) {
            self.passages.carve(current, next);
            self.visited[self.grid.id(next)] = true;
            if n_candidates > 1 {
                self.extendable.insert(next);
            }
            current = next;
            num += 1;
        }
        self.extendable.remove(current);
        num
    }
}
