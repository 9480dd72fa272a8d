use grid_flowfield::{FlowField, ObstacleGrid, PathTracer};
use grid_util::point::Point;

// Builds the field for a 10x6 grid with the goal at (8, 3) and dumps it as
// arrows, then traces the path from the (0, 0) corner. With no obstacles the
// path takes 8 hops, the Chebyshev distance between the two cells.
fn main() -> Result<(), grid_flowfield::FieldError> {
    let mut grid = ObstacleGrid::new(10, 6)?;
    for p in [Point::new(5, 2), Point::new(5, 3), Point::new(5, 4)] {
        grid.set_blocked(p, true)?;
    }
    println!("{grid}");

    let field = FlowField::build(&grid, Point::new(8, 3))?;
    println!("{field}");

    let path = PathTracer::new().trace(&field, Point::new(0, 0))?;
    println!("Path ({} hops):", path.len() - 1);
    for p in path {
        println!("{:?}", p);
    }
    Ok(())
}
