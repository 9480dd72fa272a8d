//! # grid_flowfield
//!
//! A grid-based flow-field pathfinding system. A single reverse
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) flood
//! from a goal cell builds a [FlowField] that stores, for every reachable
//! cell of an 8-connected uniform-cost grid, the direction of a shortest
//! path toward the goal and the hop count. [PathTracer] then reads a full
//! path off the field from any start cell in O(path length) with no further
//! searching. The intended pattern is one goal, one build, many starts. Note
//! that this assumes a uniform-cost grid.
//!
//! ```
//! use grid_flowfield::{FlowField, ObstacleGrid, PathTracer};
//! use grid_util::point::Point;
//!
//! let mut grid = ObstacleGrid::new(10, 6)?;
//! grid.set_blocked(Point::new(4, 3), true)?;
//! let field = FlowField::build(&grid, Point::new(8, 3))?;
//! let path = PathTracer::new().trace(&field, Point::new(0, 0))?;
//! assert_eq!(path.last(), Some(&Point::new(8, 3)));
//! # Ok::<(), grid_flowfield::FieldError>(())
//! ```

pub mod direction;
pub mod error;
pub mod flow_field;
pub mod grid;
pub mod tracer;

pub use crate::direction::Direction;
pub use crate::error::FieldError;
pub use crate::flow_field::{FieldCell, FlowField};
pub use crate::grid::ObstacleGrid;
pub use crate::tracer::PathTracer;
