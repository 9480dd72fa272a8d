use crate::error::FieldError;
use crate::flow_field::FlowField;
use grid_util::point::Point;
use log::debug;

/// Walks a built [FlowField] from a start cell to the field's goal by
/// following the stored directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathTracer;

impl PathTracer {
    pub fn new() -> PathTracer {
        PathTracer
    }

    /// Materializes the path from `start` to the goal, both endpoints
    /// included.
    ///
    /// Every hop follows the direction the builder stored, which drops the
    /// remaining step count by exactly one, so the walk ends at the goal
    /// after `step(start)` hops and the returned sequence has length
    /// `step(start) + 1`. The sequence is a plain [Vec] and can be replayed
    /// as often as the caller likes.
    ///
    /// Fails with [FieldError::OutOfBounds] if `start` lies outside the
    /// field and with [FieldError::Unreachable] if the flood never reached
    /// it; no partial path is returned.
    pub fn trace(&self, field: &FlowField, start: Point) -> Result<Vec<Point>, FieldError> {
        if !field.is_visited(start)? {
            return Err(FieldError::Unreachable {
                x: start.x,
                y: start.y,
            });
        }
        // Only the goal carries no direction inside the visited region, so
        // the walk ends exactly there.
        let path: Vec<Point> = itertools::unfold(Some(start), |state| {
            let current = (*state)?;
            *state = field
                .cell_at(current)
                .direction
                .map(|dir| current + dir.offset());
            Some(current)
        })
        .collect();
        debug!(
            "traced {} steps from {} to goal {}",
            path.len() - 1,
            start,
            field.goal()
        );
        Ok(path)
    }
}
