use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Copies the cyclic run `points[start..=end]`, wrapping past the end of the
/// slice when `start > end`.
///
/// # Panics
///
/// Panics if `start` or `end` is out of bounds.
#[must_use]
pub fn extract_cycle(points: &[Point2], start: usize, end: usize) -> Vec<Point2> {
    if start <= end {
        points[start..=end].to_vec()
    } else {
        let mut cycle = Vec::with_capacity(points.len() - start + end + 1);
        cycle.extend_from_slice(&points[start..]);
        cycle.extend_from_slice(&points[..=end]);
        cycle
    }
}
