//! Immutable geometric values.

mod circle;
pub mod error;

pub use circle::*;
pub use error::*;
