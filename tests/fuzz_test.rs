//! Fuzzes the flow-field engine by checking on many random grids that the
//! built field agrees with an independent connected-component oracle and
//! that every visited cell traces to the goal in exactly its step count.
use grid_flowfield::{FieldError, FlowField, ObstacleGrid, PathTracer};
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> ObstacleGrid {
    let mut grid = ObstacleGrid::new(w, h).unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            grid.set_blocked(Point::new(x, y), rng.gen_bool(0.4)).unwrap();
        }
    }
    grid
}

fn random_free_cell(grid: &ObstacleGrid, rng: &mut StdRng) -> Option<Point> {
    let free: Vec<Point> = all_cells(grid).filter(|p| grid.is_free(*p)).collect();
    free.choose(rng).copied()
}

fn all_cells(grid: &ObstacleGrid) -> impl Iterator<Item = Point> + '_ {
    (0..grid.height() as i32)
        .flat_map(move |y| (0..grid.width() as i32).map(move |x| Point::new(x, y)))
}

/// Independent reachability oracle: union free 8-adjacent cell pairs and ask
/// whether a cell shares the goal's component.
fn free_components(grid: &ObstacleGrid) -> UnionFind<usize> {
    let w = grid.width();
    let mut components = UnionFind::new(w * grid.height());
    for p in all_cells(grid) {
        if !grid.is_free(p) {
            continue;
        }
        for (dx, dy) in [(1, 0), (0, 1), (1, 1), (1, -1)] {
            let n = p + Point::new(dx, dy);
            if grid.is_free(n) {
                components.union(
                    p.y as usize * w + p.x as usize,
                    n.y as usize * w + n.x as usize,
                );
            }
        }
    }
    components
}

fn visualize_grid(grid: &ObstacleGrid, goal: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *goal == p {
                print!("G");
            } else if grid.is_blocked(p).unwrap() {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz_visited_matches_components() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let Some(goal) = random_free_cell(&grid, &mut rng) else {
            continue;
        };
        let field = FlowField::build(&grid, goal).unwrap();
        let components = free_components(&grid);
        let goal_ix = goal.y as usize * N + goal.x as usize;
        for p in all_cells(&grid) {
            let expected = grid.is_free(p)
                && components.equiv(goal_ix, p.y as usize * N + p.x as usize);
            // Show the grid if the field disagrees with the oracle
            if field.is_visited(p).unwrap() != expected {
                visualize_grid(&grid, &goal);
            }
            assert_eq!(field.is_visited(p), Ok(expected));
        }
    }
}

#[test]
fn fuzz_traces_match_step_counts() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let tracer = PathTracer::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let Some(goal) = random_free_cell(&grid, &mut rng) else {
            continue;
        };
        let field = FlowField::build(&grid, goal).unwrap();
        for start in all_cells(&grid) {
            if !field.is_visited(start).unwrap() {
                assert_eq!(
                    tracer.trace(&field, start),
                    Err(FieldError::Unreachable {
                        x: start.x,
                        y: start.y
                    })
                );
                continue;
            }
            let step = field.step_of(start).unwrap();
            // A hop covers at most one Chebyshev unit, so the straight-line
            // move distance bounds the step count from below.
            assert!(step >= start.move_distance(&goal) as u32);
            let path = tracer.trace(&field, start).unwrap();
            assert_eq!(path.len() as u32, step + 1);
            assert_eq!(path[0], start);
            assert_eq!(*path.last().unwrap(), goal);
            for pair in path.windows(2) {
                assert_eq!(pair[0].move_distance(&pair[1]), 1);
                assert!(grid.is_free(pair[1]));
            }
        }
    }
}

#[test]
fn fuzz_downstream_steps_decrease_by_one() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let Some(goal) = random_free_cell(&grid, &mut rng) else {
            continue;
        };
        let field = FlowField::build(&grid, goal).unwrap();
        for p in all_cells(&grid) {
            if !field.is_visited(p).unwrap() || p == goal {
                continue;
            }
            let dir = field.direction_of(p).unwrap().expect("visited non-goal cell");
            let next = p + dir.offset();
            assert_eq!(field.is_visited(next), Ok(true));
            assert_eq!(field.step_of(next).unwrap(), field.step_of(p).unwrap() - 1);
        }
    }
}

#[test]
fn fuzz_rebuilds_are_identical() {
    const N: usize = 10;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let Some(goal) = random_free_cell(&grid, &mut rng) else {
            continue;
        };
        let first = FlowField::build(&grid, goal).unwrap();
        let second = FlowField::build(&grid, goal).unwrap();
        assert_eq!(first, second);
    }
}
