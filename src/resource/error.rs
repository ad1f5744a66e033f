//! Error types for the resource manager.

use thiserror::Error;

/// Errors that can occur when replacing managed data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    /// The supplied sequence is longer than the manager may hold.
    #[error("Data size exceeds maximum: got {len}, max {max}")]
    LengthExceeded { len: usize, max: usize },
}
