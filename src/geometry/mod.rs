mod line;
mod polygon;

pub use line::Line;
pub use polygon::Polygon;

use std::fmt;

use crate::math::Point2;

/// Formats a point as `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayPoint<'a>(pub &'a Point2);

impl fmt::Display for DisplayPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_formatting() {
        let pt = Point2::new(1.5, -2.0);
        assert_eq!(DisplayPoint(&pt).to_string(), "(1.5, -2)");
    }
}
