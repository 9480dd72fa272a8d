use thiserror::Error;

/// Errors produced by grid access, field construction and path tracing.
///
/// All of these are synchronous validation failures: nothing is retried
/// internally and a failed operation leaves no partial result behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Grid dimensions must both be at least one cell.
    #[error("invalid grid shape: {width}x{height} (both dimensions must be non-zero)")]
    InvalidShape { width: usize, height: usize },

    /// A position fell outside the `[0, width) x [0, height)` extent.
    #[error("position ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// The goal cell handed to the builder is itself blocked.
    #[error("goal cell ({x}, {y}) is blocked")]
    BlockedGoal { x: i32, y: i32 },

    /// No chain of free cells connects the requested start to the goal.
    #[error("no path from ({x}, {y}) to the goal")]
    Unreachable { x: i32, y: i32 },
}
