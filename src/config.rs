//! Compile-time constants shared across the crate.

/// Maximum number of elements a [`ResourceManager`](crate::resource::ResourceManager) may hold.
pub const MAX_SIZE: usize = 100;

/// Truncated value of π used for area calculations.
///
/// Kept at five decimal places; callers compare areas against values computed
/// with this exact literal, so it must not be swapped for [`std::f64::consts::PI`].
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;
