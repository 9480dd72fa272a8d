use grid_flowfield::{FlowField, ObstacleGrid, PathTracer};
use grid_util::point::Point;

// In this example a path is found on a 5x5 grid with shape
// S....
// .....
// ..#..
// .....
// ....E
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end (the goal the field is built toward)
fn main() -> Result<(), grid_flowfield::FieldError> {
    let mut grid = ObstacleGrid::new(5, 5)?;
    grid.set_blocked(Point::new(2, 2), true)?;
    let field = FlowField::build(&grid, Point::new(4, 4))?;
    let path = PathTracer::new().trace(&field, Point::new(0, 0))?;
    println!("A path has been found:");
    for p in path {
        println!("{:?}", p);
    }
    Ok(())
}
