//! Square grid coordinates and neighborhoods

use std::fmt;

/// Location of a single square in the maze
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction; `y` grows towards south.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    South,
    East,
    North,
    West,
}

impl Direction {
    /// All directions, in the order they are expanded into neighbor lists
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::North,
        Direction::West,
    ];

    /// Coordinate change when taking one step
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Number of times the direction is repeated in a candidate list.
    ///
    /// East and west dominate, so random walks favour long horizontal
    /// corridors.
    pub const fn weight(self) -> usize {
        match self {
            Direction::South | Direction::North => 1,
            Direction::East | Direction::West => 5,
        }
    }
}

/// N×N grid, responsible for the cell <-> node id mapping
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.size * self.size
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Linear node id of a cell, `x * N + y`
    pub const fn id(&self, cell: Cell) -> usize {
        cell.x * self.size + cell.y
    }

    /// Inverse of [Self::id]
    ///
    /// # Panics
    ///
    /// On an empty grid, which has no cells to map to.
    pub const fn cell(&self, id: usize) -> Cell {
        Cell::new(id / self.size, id % self.size)
    }

    /// Step from `cell` into `direction`, if the target is in bounds
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = usize::try_from(cell.x as i64 + dx).ok()?;
        let y = usize::try_from(cell.y as i64 + dy).ok()?;
        let next = Cell::new(x, y);
        self.contains(next).then_some(next)
    }

    /// Weighted neighbor list used for random selection.
    ///
    /// Each in-bounds neighbor appears [Direction::weight] times, in
    /// S, E, N, W order.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut ret = Vec::with_capacity(12);
        for direction in Direction::ALL {
            if let Some(next) = self.step(cell, direction) {
                ret.extend(std::iter::repeat(next).take(direction.weight()));
            }
        }
        ret
    }

    /// In-bounds neighbors, each once
    pub fn adjacent(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(cell, direction))
    }

    /// Every cell, ordered by node id
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(|id| self.cell(id))
    }

    /// Boundary cells in exit scan order.
    ///
    /// For each `i` in `0..N` yields (0, i), (i, 0), (N-1, i), (i, N-1).
    /// Corners and, for tiny grids, whole edges come up more than once.
    pub fn boundary(&self) -> impl Iterator<Item = Cell> + '_ {
        let last = self.size.saturating_sub(1);
        (0..self.size).flat_map(move |i| {
            [
                Cell::new(0, i),
                Cell::new(i, 0),
                Cell::new(last, i),
                Cell::new(i, last),
            ]
        })
    }
}
