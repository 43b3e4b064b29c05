use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "rectangle center and half extents must be finite, half extents non-negative \
         (half_width: {half_width}, half_height: {half_height})"
    )]
    InvalidRectangleDims { half_width: f32, half_height: f32 },
    #[error("node capacity must be at least 1 (capacity: {capacity})")]
    InvalidCapacity { capacity: usize },
    #[error("invalid quadtree config: {0}")]
    InvalidConfig(String),
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
