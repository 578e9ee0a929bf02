//! Text and SVG drawings of a maze
//!
//! Both renderers only rely on [Maze::can_pass], [Maze::exit] and an
//! optional solution path.

use std::collections::HashSet;

use itertools::Itertools;

use crate::grid::{Cell, Direction};
use crate::Maze;

/// Draw the maze as ASCII art.
///
/// Each cell is two characters wide. The entrance is marked with `V` above
/// the top-left cell, the exit with `E`, and cells on `path` with `++`.
///
/// ```text
/// --V-EE-
/// |++|++E
/// |  +  |
/// |++ ++|
/// -------
/// ```
pub fn ascii(maze: &Maze, path: &[Cell]) -> String {
    let n = maze.size();
    let exit = maze.exit();
    let on_path: HashSet<Cell> = path.iter().copied().collect();

    let mut lines = Vec::with_capacity(2 * n + 1);
    for y in 0..n {
        // Wall above the row
        let mut line = String::new();
        if y == 0 {
            for x in 0..n {
                line.push_str(if exit.y == 0 && exit.x == x {
                    "-EE"
                } else if x == 0 {
                    "--V"
                } else {
                    "---"
                });
            }
            line.push('-');
        } else {
            for x in 0..n {
                line.push(if x > 0 { '+' } else { '|' });
                let up = maze.can_pass(Cell::new(x, y), Cell::new(x, y - 1));
                line.push_str(if up { "  " } else { "--" });
            }
            line.push('|');
        }
        lines.push(line);

        // Cells and the walls between them
        let mut line = String::new();
        for x in 0..n {
            if x == 0 {
                line.push(if exit == Cell::new(0, y) { 'E' } else { '|' });
            } else {
                let left = maze.can_pass(Cell::new(x, y), Cell::new(x - 1, y));
                line.push(if left { ' ' } else { '|' });
            }
            line.push_str(if on_path.contains(&Cell::new(x, y)) {
                "++"
            } else {
                "  "
            });
        }
        line.push(if exit == Cell::new(n - 1, y) { 'E' } else { '|' });
        lines.push(line);
    }

    let bottom = (0..n)
        .map(|x| {
            if exit.y + 1 == n && exit.x == x {
                "-EE"
            } else {
                "---"
            }
        })
        .join("");
    lines.push(bottom + "-");

    lines.iter().join("\n") + "\n"
}

/// Side length of a single cell in SVG units
pub const CELL_SIZE: i64 = 20;

/// Rotation of the arrow glyph pointing into `direction`
fn rotation(direction: Direction) -> f64 {
    match direction {
        Direction::South => 0.0,
        Direction::East => -90.0,
        Direction::North => 180.0,
        Direction::West => 90.0,
    }
}

/// Minimal SVG document builder
struct Svg {
    out: String,
}

impl Svg {
    fn start(width: i64, height: i64) -> Self {
        let mut out = String::from("<?xml version=\"1.0\"?>\n");
        out.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n",
            width, height
        ));
        Self { out }
    }

    fn translate(&mut self, x: i64, y: i64) {
        self.out
            .push_str(&format!("<g transform=\"translate({},{})\">\n", x, y));
    }

    fn translate_rotate(&mut self, x: i64, y: i64, angle: f64) {
        self.out.push_str(&format!(
            "<g transform=\"translate({},{}) rotate({})\">\n",
            x, y, angle
        ));
    }

    fn gstyle(&mut self, style: &str) {
        self.out.push_str(&format!("<g style=\"{}\">\n", style));
    }

    fn gend(&mut self) {
        self.out.push_str("</g>\n");
    }

    fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.out.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />\n",
            x1, y1, x2, y2
        ));
    }

    fn end(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }

    /// Arrow at the side of cell (`x`, `y`) facing `direction`, pointing
    /// south before rotation.
    fn arrow(&mut self, x: i64, y: i64, direction: Direction) {
        let half = CELL_SIZE / 2;
        let third = CELL_SIZE / 3;
        let (dx, dy) = direction.delta();
        let mx = x * CELL_SIZE + half + dx * half;
        let my = y * CELL_SIZE + half + dy * half;

        self.translate_rotate(mx, my, rotation(direction));

        self.line(0, -half, 0, half);
        self.line(0, half, CELL_SIZE / 6, 0);
        self.line(0, half, -CELL_SIZE / 6, 0);

        self.line(-half, 0, -third, 0);
        self.line(-third, CELL_SIZE / 10, -third, -CELL_SIZE / 10);

        self.line(half, 0, third, 0);
        self.line(third, CELL_SIZE / 10, third, -CELL_SIZE / 10);

        self.gend();
    }
}

/// Draw the maze as an SVG document.
///
/// Walls are black, with arrows marking the entrance and the exit. If
/// `path` is not empty, it is drawn in red through the cell centers.
pub fn svg(maze: &Maze, path: &[Cell]) -> String {
    let n = maze.size() as i64;
    let exit = maze.exit();
    let (ex, ey) = (exit.x as i64, exit.y as i64);
    let cs = CELL_SIZE;

    let mut s = Svg::start(cs * (n + 2), cs * (n + 2));
    s.translate(cs, cs);
    s.gstyle("stroke:black");

    // Outer walls, with gaps for the entrance and the exit
    s.arrow(0, -1, Direction::South);
    if ey == 0 {
        s.line(cs, 0, ex * cs, 0);
        s.arrow(ex, ey, Direction::North);
        s.line((ex + 1) * cs, 0, n * cs, 0);
    } else {
        s.line(cs, 0, n * cs, 0);
    }

    if ey == n - 1 {
        s.line(0, n * cs, ex * cs, n * cs);
        s.arrow(ex, ey, Direction::South);
        s.line((ex + 1) * cs, n * cs, n * cs, n * cs);
    } else {
        s.line(0, n * cs, n * cs, n * cs);
    }

    if ex == 0 && ey != 0 && ey != n - 1 {
        s.line(0, 0, 0, ey * cs);
        s.arrow(ex, ey, Direction::West);
        s.line(0, (ey + 1) * cs, 0, n * cs);
    } else {
        s.line(0, 0, 0, n * cs);
    }

    if ex == n - 1 && ey != 0 && ey != n - 1 {
        s.line(n * cs, 0, n * cs, ey * cs);
        s.arrow(ex, ey, Direction::East);
        s.line(n * cs, (ey + 1) * cs, n * cs, n * cs);
    } else {
        s.line(n * cs, 0, n * cs, n * cs);
    }

    // Inner walls, west and north side of each cell
    for cell in maze.grid().cells() {
        let (x, y) = (cell.x as i64, cell.y as i64);
        if cell.x > 0 && !maze.can_pass(cell, Cell::new(cell.x - 1, cell.y)) {
            s.line(x * cs, y * cs, x * cs, y * cs + cs);
        }
        if cell.y > 0 && !maze.can_pass(cell, Cell::new(cell.x, cell.y - 1)) {
            s.line(x * cs, y * cs, x * cs + cs, y * cs);
        }
    }

    s.gstyle("stroke:red");
    let center = |c: &Cell| (c.x as i64 * cs + cs / 2, c.y as i64 * cs + cs / 2);
    for (a, b) in path.iter().map(center).tuple_windows() {
        s.line(a.0, a.1, b.0, b.1);
    }
    s.gend();

    s.gend();
    s.gend();
    s.end()
}
