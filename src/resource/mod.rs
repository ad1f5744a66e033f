//! Bounded, exclusively owned integer storage.

mod manager;
pub mod error;

pub use error::*;
pub use manager::*;
