use crate::config::PI;
use crate::shape::ShapeError;
use tracing::{debug, warn};

/// A circle described by its radius.
///
/// The radius is checked once in [`Circle::new`] and the value is immutable
/// afterwards, so every `Circle` in existence has a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    /// Returns [`ShapeError::InvalidArgument`] if `radius` is not strictly positive
    /// (NaN included).
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if radius.is_nan() || radius <= 0.0 {
            warn!(radius, "Rejected circle with non-positive radius");
            return Err(ShapeError::InvalidArgument(format!(
                "Radius must be positive, got {radius}"
            )));
        }
        debug!(radius, "Circle created");
        Ok(Self { radius })
    }

    /// Area computed from [`PI`] on every call.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl TryFrom<f64> for Circle {
    type Error = ShapeError;

    fn try_from(radius: f64) -> Result<Self, Self::Error> {
        Self::new(radius)
    }
}
