//! Error types for shape construction.

use thiserror::Error;

/// Errors that can occur while building a shape.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShapeError {
    /// An input value violates the shape's invariant.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
