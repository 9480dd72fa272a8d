use crate::direction::Direction;
use crate::error::FieldError;
use crate::grid::ObstacleGrid;
use core::fmt;
use grid_util::point::Point;
use log::{debug, info};
use std::collections::VecDeque;

/// Per-cell record of a built [FlowField].
///
/// The goal cell and unreached cells both carry `step == 0` and no direction;
/// only the `visited` flag tells them apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldCell {
    /// Move that brings the cell one hop closer to the goal. [None] for the
    /// goal itself and for cells the flood never reached.
    pub direction: Option<Direction>,
    /// Hop count to the goal along the discovered path.
    pub step: u32,
    /// Set once the flood has committed direction and step for this cell.
    pub visited: bool,
}

/// Vector field encoding, for every cell reachable from a single goal, the
/// next move of a shortest 8-connected path toward that goal plus the hop
/// count. Built once per `(grid, goal)` pair and read-only afterward, so one
/// field answers path queries from any number of start cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowField {
    width: usize,
    height: usize,
    goal: Point,
    cells: Vec<FieldCell>,
}

impl FlowField {
    /// Floods the grid breadth-first outward from `goal` and records, for
    /// every reachable free cell, the direction toward the neighbor one hop
    /// closer to the goal.
    ///
    /// Cells the flood cannot reach (blocked, or sealed off from the goal)
    /// stay unvisited. Fails with [FieldError::OutOfBounds] if the goal lies
    /// outside the grid and with [FieldError::BlockedGoal] if the goal cell
    /// is blocked; on failure no field value exists at all.
    pub fn build(grid: &ObstacleGrid, goal: Point) -> Result<FlowField, FieldError> {
        if !grid.in_bounds(goal) {
            return Err(FieldError::OutOfBounds {
                x: goal.x,
                y: goal.y,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.is_blocked(goal)? {
            return Err(FieldError::BlockedGoal {
                x: goal.x,
                y: goal.y,
            });
        }
        info!(
            "building flow field toward {} on a {}x{} grid",
            goal,
            grid.width(),
            grid.height()
        );
        let mut field = FlowField {
            width: grid.width(),
            height: grid.height(),
            goal,
            cells: vec![FieldCell::default(); grid.width() * grid.height()],
        };
        let mut visited_count = 0usize;
        let mut queue: VecDeque<Point> = VecDeque::new();
        queue.push_back(goal);
        while let Some(current) = queue.pop_front() {
            // A cell can sit in the queue more than once, pushed by several
            // of its neighbors; the first dequeue commits it.
            if !grid.is_free(current) || field.cell_at(current).visited {
                continue;
            }
            let ix = field.index(current);
            field.cells[ix].visited = true;
            visited_count += 1;

            // Scan the neighborhood in Direction::ALL order. Neighbors the
            // flood has already committed compete to be the downstream cell;
            // the strict comparison keeps the first minimum on step ties.
            let mut downstream: Option<(u32, Direction)> = None;
            for dir in Direction::ALL {
                let neighbor = current + dir.offset();
                if !grid.is_free(neighbor) {
                    continue;
                }
                let cell = field.cell_at(neighbor);
                if cell.visited {
                    if downstream.map_or(true, |(step, _)| cell.step < step) {
                        downstream = Some((cell.step, dir));
                    }
                } else {
                    queue.push_back(neighbor);
                }
            }
            if let Some((step, dir)) = downstream {
                field.cells[ix].step = step + 1;
                field.cells[ix].direction = Some(dir);
            }
        }
        debug!("flow field complete, {visited_count} cells visited");
        Ok(field)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The goal cell the field was built toward.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Move that brings `pos` one hop closer to the goal, or [None] at the
    /// goal itself and on unreached cells.
    pub fn direction_of(&self, pos: Point) -> Result<Option<Direction>, FieldError> {
        self.checked_index(pos).map(|ix| self.cells[ix].direction)
    }

    /// Hop count from `pos` to the goal. Zero both at the goal and on
    /// unreached cells; check [is_visited](Self::is_visited) to tell them
    /// apart.
    pub fn step_of(&self, pos: Point) -> Result<u32, FieldError> {
        self.checked_index(pos).map(|ix| self.cells[ix].step)
    }

    /// Whether the flood reached `pos`, which is exactly whether a path of
    /// free 8-connected cells joins it to the goal.
    pub fn is_visited(&self, pos: Point) -> Result<bool, FieldError> {
        self.checked_index(pos).map(|ix| self.cells[ix].visited)
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub(crate) fn cell_at(&self, pos: Point) -> FieldCell {
        self.cells[self.index(pos)]
    }

    fn index(&self, pos: Point) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    fn checked_index(&self, pos: Point) -> Result<usize, FieldError> {
        if self.in_bounds(pos) {
            Ok(self.index(pos))
        } else {
            Err(FieldError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for FlowField {
    /// Arrow dump of the field: `E` marks the goal, `#` cells the flood never
    /// reached, every other cell the move a traced path takes from it.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = Point::new(x, y);
                let cell = self.cell_at(pos);
                let glyph = match cell.direction {
                    Some(dir) => dir.arrow(),
                    None if pos == self.goal => 'E',
                    None => '#',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
