//! Perfect maze with the exit as far from the entrance as possible
//!
//! The entrance is always the top-left cell (0, 0). After the maze has
//! been carved, the boundary cell furthest away from the entrance is
//! selected as the exit.
//!
//! # Examples
//! ```
//! use longest_exit::{generate, render, Cell};
//!
//! let maze = generate(8, Some(42));
//! let path = maze.solve();
//! assert_eq!(path.first(), Some(&Cell::new(0, 0)));
//! assert_eq!(path.last(), Some(&maze.exit()));
//!
//! let art = render::ascii(&maze, &path);
//! assert!(art.starts_with("--V"));
//! ```

use std::cell::OnceCell;

pub mod generator;
pub mod grid;
pub mod passages;
pub mod render;

pub use generator::MazeGenerator;
pub use grid::{Cell, Direction, Grid};
pub use passages::PassageGraph;

/// Generate a maze of `size`×`size` cells.
///
/// With `seed`, the result is reproducible; otherwise the random source
/// is seeded from entropy.
pub fn generate(size: usize, seed: Option<u64>) -> Maze {
    MazeGenerator::new(seed).generate(size)
}

/// Square maze, whose passages form a spanning tree of the grid
pub struct Maze {
    grid: Grid,
    /// Open walls between cells
    passages: PassageGraph,
    /// Boundary cell furthest away from [Maze::ORIGIN]
    exit: Cell,
    /// Distances from the origin, indexed by cell id
    ///
    /// Filled on first use by [Self::distances]. The passages are fixed
    /// once generated, so this is never invalidated.
    dists: OnceCell<Option<Vec<Option<usize>>>>,
}

impl Maze {
    /// Entrance of every maze
    pub const ORIGIN: Cell = Cell::new(0, 0);

    /// Maze without any passages.
    ///
    /// Use [MazeGenerator] to carve one; distances, score and solution of
    /// an uncarved maze are empty.
    pub fn new(size: usize) -> Self {
        let grid = Grid::new(size);
        Self::from_passages(grid, PassageGraph::new(grid))
    }

    /// Wrap carved passages; the exit is selected right away.
    pub(crate) fn from_passages(grid: Grid, passages: PassageGraph) -> Self {
        let mut maze = Self {
            grid,
            passages,
            exit: Self::ORIGIN,
            dists: OnceCell::new(),
        };
        maze.select_exit();
        maze
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn passages(&self) -> &PassageGraph {
        &self.passages
    }

    /// Number of open walls
    pub fn edge_count(&self) -> usize {
        self.passages.edge_count()
    }

    /// Is there no wall between `a` and `b`?
    ///
    /// Cells out of range never have passages.
    pub fn can_pass(&self, a: Cell, b: Cell) -> bool {
        self.passages.can_pass(a, b)
    }

    /// Exit cell, on the outer boundary
    pub fn exit(&self) -> Cell {
        self.exit
    }

    /// Make sure the distance field is available.
    ///
    /// Calling this again does nothing.
    pub fn compute_distances(&self) {
        self.dists
            .get_or_init(|| self.passages.distances_from(Self::ORIGIN));
    }

    /// Distances from the origin to each cell, indexed by cell id.
    ///
    /// `None` if the maze has not been carved.
    pub fn distances(&self) -> Option<&[Option<usize>]> {
        self.compute_distances();
        self.dists.get().and_then(|d| d.as_deref())
    }

    /// Distance from the origin to `cell`
    pub fn distance(&self, cell: Cell) -> Option<usize> {
        if !self.grid.contains(cell) {
            return None;
        }
        let id = self.grid.id(cell);
        self.distances()?.get(id).copied().flatten()
    }

    /// Choose the boundary cell with the greatest distance as the exit.
    ///
    /// Ties keep the first cell in [Grid::boundary] order; the search
    /// starts from the origin at distance 0.
    pub fn select_exit(&mut self) {
        let mut best_exit = Self::ORIGIN;
        let mut best_dist = 0;
        for cell in self.grid.boundary() {
            if let Some(dist) = self.distance(cell) {
                if dist > best_dist {
                    best_dist = dist;
                    best_exit = cell;
                }
            }
        }
        self.exit = best_exit;
    }

    /// Quality of the maze.
    ///
    /// Sum of distances over cells, where no neighbor is further away from
    /// the origin. Deep dead ends all over the grid give a high score.
    pub fn score(&self) -> f64 {
        if self.distances().is_none() {
            return 0.0;
        }
        let mut score = 0;
        for cell in self.grid.cells() {
            let Some(dist) = self.distance(cell) else {
                continue;
            };
            let local_maximum = self
                .grid
                .adjacent(cell)
                .all(|n| self.distance(n).map_or(true, |d| d <= dist));
            if local_maximum {
                score += dist;
            }
        }
        score as f64
    }

    /// Shortest path from the origin to the exit, both included.
    ///
    /// Empty if the maze has not been carved.
    pub fn solve(&self) -> Vec<Cell> {
        self.passages
            .shortest_path(Self::ORIGIN, self.exit)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, Grid, Maze, PassageGraph};

    /// 3x3 maze:
    ///
    /// ```text
    /// (0,0) (1,0) (2,0)
    ///   |           |
    /// (0,1)-(1,1)-(2,1)
    ///         |
    /// (0,2)-(1,2) (2,2)
    /// ```
    /// (2,2) is left unreachable on purpose
    fn sample() -> Maze {
        let grid = Grid::new(3);
        let mut passages = PassageGraph::new(grid);
        for (a, b) in [
            ((0, 0), (0, 1)),
            ((0, 1), (1, 1)),
            ((1, 1), (2, 1)),
            ((2, 1), (2, 0)),
            ((1, 1), (1, 2)),
            ((1, 2), (0, 2)),
        ] {
            passages.carve(Cell::new(a.0, a.1), Cell::new(b.0, b.1));
        }
        Maze::from_passages(grid, passages)
    }

    #[test]
    fn distances_from_origin() {
        let maze = sample();
        assert_eq!(maze.distance(Cell::new(0, 0)), Some(0));
        assert_eq!(maze.distance(Cell::new(1, 1)), Some(2));
        assert_eq!(maze.distance(Cell::new(2, 0)), Some(4));
        assert_eq!(maze.distance(Cell::new(0, 2)), Some(4));
        assert_eq!(maze.distance(Cell::new(2, 2)), None);
        assert_eq!(maze.distance(Cell::new(5, 5)), None);
    }

    #[test]
    fn exit_tie_keeps_first_scanned() {
        // (2, 0) and (0, 2) are both at distance 4. At i = 0 the scan
        // visits (2, 0) before (0, 2) comes up at i = 2.
        let maze = sample();
        assert_eq!(maze.exit(), Cell::new(2, 0));
    }

    #[test]
    fn score_sums_local_maxima() {
        // Local maxima: (2, 0) and (0, 2) at 4 each
        let maze = sample();
        assert_eq!(maze.score(), 8.0);
    }

    #[test]
    fn solve_follows_passages() {
        let maze = sample();
        assert_eq!(
            maze.solve(),
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 0)
            ]
        );
    }

    #[test]
    fn repeated_distance_computation_is_stable() {
        let maze = sample();
        let first = maze.distances().map(|d| d.to_vec());
        maze.compute_distances();
        let second = maze.distances().map(|d| d.to_vec());
        assert_eq!(first, second);
        assert_eq!(maze.edge_count(), 6);
    }

    #[test]
    fn uncarved_maze_is_degenerate() {
        let maze = Maze::new(4);
        assert_eq!(maze.distances(), None);
        assert_eq!(maze.exit(), Maze::ORIGIN);
        assert_eq!(maze.score(), 0.0);
        assert!(maze.solve().is_empty());
        assert!(!maze.can_pass(Cell::new(0, 0), Cell::new(1, 0)));
    }
}
