//! Pure data structures with no behavior attached.

use serde::{Deserialize, Serialize};

/// Outcome of a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Success,
    Failure,
    Pending,
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variants_are_distinct() {
        assert_ne!(Status::Success, Status::Failure);
        assert_ne!(Status::Failure, Status::Pending);
        assert_ne!(Status::Success, Status::Pending);
    }

    #[test]
    fn test_point_is_plain_data() {
        let mut p = Point { x: 1.5, y: -2.0 };
        p.x += 1.0;
        assert_eq!(p, Point { x: 2.5, y: -2.0 });
    }
}
