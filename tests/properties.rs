use longest_exit::{generate, Cell, Maze};
use proptest::prelude::*;

/// Root of `id` in a disjoint-set forest, with path halving
fn find(parent: &mut [usize], mut id: usize) -> usize {
    while parent[id] != id {
        parent[id] = parent[parent[id]];
        id = parent[id];
    }
    id
}

/// Do the passages form a forest? Any cycle would give two simple paths
/// between the cells on it.
fn is_acyclic(maze: &Maze) -> bool {
    let grid = maze.grid();
    let mut parent: Vec<usize> = (0..grid.len()).collect();
    for (a, b) in maze.passages().edges() {
        let ra = find(&mut parent, grid.id(a));
        let rb = find(&mut parent, grid.id(b));
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn passages_form_spanning_tree(size in 1usize..16, seed in any::<u64>()) {
        let maze = generate(size, Some(seed));
        prop_assert_eq!(maze.edge_count(), size * size - 1);
        for cell in maze.grid().cells() {
            prop_assert!(maze.distance(cell).is_some(), "{} unreachable", cell);
        }
        prop_assert!(is_acyclic(&maze));
    }

    #[test]
    fn solution_length_matches_exit_distance(size in 1usize..16, seed in any::<u64>()) {
        let maze = generate(size, Some(seed));
        let path = maze.solve();
        prop_assert_eq!(path.first(), Some(&Maze::ORIGIN));
        prop_assert_eq!(path.last(), Some(&maze.exit()));
        prop_assert_eq!(Some(path.len() - 1), maze.distance(maze.exit()));
        for pair in path.windows(2) {
            prop_assert!(maze.can_pass(pair[0], pair[1]));
        }
    }

    #[test]
    fn exit_is_furthest_boundary_cell(size in 1usize..16, seed in any::<u64>()) {
        let maze = generate(size, Some(seed));
        let exit = maze.exit();
        let last = size - 1;
        prop_assert!(exit.x == 0 || exit.y == 0 || exit.x == last || exit.y == last);

        let best = maze.distance(exit).unwrap();
        let boundary: Vec<Cell> = maze.grid().boundary().collect();
        for cell in &boundary {
            prop_assert!(maze.distance(*cell).unwrap() <= best);
        }
        // First occurrence wins ties
        let first = boundary
            .iter()
            .find(|c| maze.distance(**c) == Some(best))
            .copied();
        if best > 0 {
            prop_assert_eq!(first, Some(exit));
        } else {
            prop_assert_eq!(exit, Maze::ORIGIN);
        }
    }

    #[test]
    fn distances_are_computed_once(size in 1usize..12, seed in any::<u64>()) {
        let maze = generate(size, Some(seed));
        let edges_before: Vec<_> = maze.passages().edges().collect();
        let first = maze.distances().map(<[_]>::to_vec);
        maze.compute_distances();
        let second = maze.distances().map(<[_]>::to_vec);
        prop_assert_eq!(first, second);
        prop_assert_eq!(edges_before, maze.passages().edges().collect::<Vec<_>>());
    }

    #[test]
    fn seed_determines_maze(size in 1usize..12, seed in any::<u64>()) {
        let a = generate(size, Some(seed));
        let b = generate(size, Some(seed));
        prop_assert_eq!(
            a.passages().edges().collect::<Vec<_>>(),
            b.passages().edges().collect::<Vec<_>>()
        );
        prop_assert_eq!(a.exit(), b.exit());
        prop_assert_eq!(a.score(), b.score());
    }

    #[test]
    fn score_covers_deepest_cell(size in 2usize..12, seed in any::<u64>()) {
        // The furthest cell of all is always a local maximum
        let maze = generate(size, Some(seed));
        let deepest = maze.distances().unwrap().iter().flatten().max().copied().unwrap();
        prop_assert!(maze.score() >= deepest as f64);
        prop_assert!(deepest > 0);
    }
}

#[test]
fn single_cell_maze() {
    let maze = generate(1, None);
    assert_eq!(maze.edge_count(), 0);
    assert_eq!(maze.exit(), Cell::new(0, 0));
    assert_eq!(maze.score(), 0.0);
    assert_eq!(maze.solve(), vec![Cell::new(0, 0)]);
}

#[test]
fn fixed_seed_five_by_five() {
    let edges = || {
        generate(5, Some(2024))
            .passages()
            .edges()
            .collect::<Vec<_>>()
    };
    let first = edges();
    assert_eq!(first.len(), 24);
    for _ in 0..3 {
        assert_eq!(edges(), first);
    }
}

#[test]
fn unseeded_mazes_are_still_perfect() {
    for _ in 0..10 {
        let maze = generate(6, None);
        assert_eq!(maze.edge_count(), 35);
        assert!(is_acyclic(&maze));
    }
}
