use thiserror::Error;

/// Errors produced by the clipping and offsetting operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipError {
    /// One of the input polygons has overlapping edges with itself. Inputs
    /// with self-overlapping contours are not supported.
    #[error("input polygon has self-overlapping edges")]
    SelfOverlappingEdges,
    /// Contour assembly could not connect the result edges into closed
    /// contours. Indicates an internal invariant violation.
    #[error("failed to connect result edges into closed contours")]
    ConnectEdges,
    /// An offset parameter is invalid (non-finite distance or zero arc
    /// segment count).
    #[error("invalid offset parameter: {0}")]
    InvalidOffsetParameter(&'static str),
}
