use super::Point2;

/// Intersection of the line through `p1`, `p2` with the infinite line through
/// `l1`, `l2`.
///
/// The parameter along `p1 -> p2` is not clamped to `[0, 1]`. Callers pass
/// endpoints already known to straddle the line, so the result lies on the
/// segment in practice.
///
/// Returns `None` when the denominator magnitude is below `tolerance`
/// (parallel or collinear lines).
#[must_use]
pub fn segment_line_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    l1: &Point2,
    l2: &Point2,
    tolerance: f64,
) -> Option<Point2> {
    let d = *p2 - *p1;
    let e = *l2 - *l1;
    let denom = d.x * e.y - d.y * e.x;
    if denom.abs() < tolerance {
        return None;
    }
    let t = ((l1.x - p1.x) * e.y - (l1.y - p1.y) * e.x) / denom;
    Some(*p1 + d * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn vertical_edge_horizontal_line() {
        let pt = segment_line_intersect_2d(
            &p(4.0, 0.0),
            &p(4.0, 3.0),
            &p(-1.0, 1.5),
            &p(5.0, 1.5),
            TOLERANCE,
        )
        .unwrap();
        assert_relative_eq!(pt.x, 4.0);
        assert_relative_eq!(pt.y, 1.5);
    }

    #[test]
    fn diagonal_crossing() {
        let pt = segment_line_intersect_2d(
            &p(5.0, 2.0),
            &p(4.0, 3.0),
            &p(0.0, 0.0),
            &p(6.0, 4.0),
            TOLERANCE,
        )
        .unwrap();
        // Edge x + y = 7 meets y = 2x/3 at x = 4.2.
        assert_relative_eq!(pt.x, 4.2, epsilon = 1e-12);
        assert_relative_eq!(pt.y, 2.8, epsilon = 1e-12);
    }

    #[test]
    fn line_extends_beyond_its_defining_points() {
        // The line is defined by two points far to the left of the segment.
        let pt = segment_line_intersect_2d(
            &p(10.0, -1.0),
            &p(10.0, 1.0),
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            TOLERANCE,
        )
        .unwrap();
        assert_relative_eq!(pt.x, 10.0);
        assert_relative_eq!(pt.y, 0.0);
    }

    #[test]
    fn parallel_returns_none() {
        let pt = segment_line_intersect_2d(
            &p(0.0, 1.0),
            &p(3.0, 1.0),
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            TOLERANCE,
        );
        assert!(pt.is_none());
    }

    #[test]
    fn collinear_returns_none() {
        let pt = segment_line_intersect_2d(
            &p(0.0, 0.0),
            &p(3.0, 3.0),
            &p(1.0, 1.0),
            &p(2.0, 2.0),
            TOLERANCE,
        );
        assert!(pt.is_none());
    }
}
