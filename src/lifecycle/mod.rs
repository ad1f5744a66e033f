//! Process-level setup for the harness binary.

pub mod tracing;

pub use self::tracing::setup_tracing;
