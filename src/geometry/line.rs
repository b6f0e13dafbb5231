use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::side_2d::{side_of_line_2d, Side};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::DisplayPoint;

/// An infinite line through two distinct points.
///
/// The points only fix position and orientation; the line extends past both
/// of them in either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Point2,
    p2: Point2,
}

impl Line {
    /// Creates the line through `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::CoincidentPoints` if `p1 == p2` (exact comparison)
    /// - `GeometryError::NonFinite` if either point has a NaN or infinite coordinate
    pub fn new(p1: Point2, p2: Point2) -> Result<Self> {
        for p in [&p1, &p2] {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(GeometryError::NonFinite { x: p.x, y: p.y }.into());
            }
        }
        if p1 == p2 {
            return Err(GeometryError::CoincidentPoints { x: p1.x, y: p1.y }.into());
        }
        Ok(Self { p1, p2 })
    }

    /// Returns the first defining point.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the second defining point.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns `p2 - p1` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Classifies `point` against this line using [`TOLERANCE`].
    #[must_use]
    pub fn side_of(&self, point: &Point2) -> Side {
        side_of_line_2d(&self.p1, &self.p2, point, TOLERANCE)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line[{} - {}]",
            DisplayPoint(&self.p1),
            DisplayPoint(&self.p2)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolycutError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn distinct_points_succeed() {
        let line = Line::new(p(0.0, 0.0), p(1.0, 2.0)).unwrap();
        assert_eq!(*line.p1(), p(0.0, 0.0));
        assert_eq!(*line.p2(), p(1.0, 2.0));
        assert_eq!(line.direction(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn coincident_points_fail() {
        let err = Line::new(p(3.0, 4.0), p(3.0, 4.0)).unwrap_err();
        assert!(matches!(
            err,
            PolycutError::Geometry(GeometryError::CoincidentPoints { x, y }) if x == 3.0 && y == 4.0
        ));
    }

    #[test]
    fn nearly_coincident_points_succeed() {
        // Equality is exact, not tolerance-based.
        assert!(Line::new(p(0.0, 0.0), p(1e-15, 0.0)).is_ok());
    }

    #[test]
    fn non_finite_points_fail() {
        let err = Line::new(p(f64::NAN, 0.0), p(1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            PolycutError::Geometry(GeometryError::NonFinite { .. })
        ));
        assert!(Line::new(p(0.0, 0.0), p(f64::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn side_of_point() {
        let line = Line::new(p(-1.0, 1.5), p(5.0, 1.5)).unwrap();
        assert_eq!(line.side_of(&p(0.0, 3.0)), Side::Left);
        assert_eq!(line.side_of(&p(0.0, 0.0)), Side::Right);
        assert_eq!(line.side_of(&p(100.0, 1.5)), Side::On);
    }

    #[test]
    fn display_format() {
        let line = Line::new(p(-1.0, 1.5), p(5.0, 1.5)).unwrap();
        assert_eq!(line.to_string(), "Line[(-1, 1.5) - (5, 1.5)]");
    }
}
