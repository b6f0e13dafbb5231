use crate::math::intersect_2d::segment_line_intersect_2d;
use crate::math::side_2d::{side_of_line_2d, Side};
use crate::math::Point2;

/// Polygon boundary with the cut line's crossings spliced in.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AugmentedBoundary {
    /// Original vertices plus inserted intersection points, in edge order.
    pub vertices: Vec<Point2>,
    /// Indices into `vertices` of points lying on the line, in the order
    /// they were first met.
    pub cut_indices: Vec<usize>,
}

/// Walks every edge `vertices[i] -> vertices[(i + 1) % n]` and records where
/// the line through `l1`, `l2` meets the boundary.
///
/// - A vertex on the line is marked as a cut point.
/// - An edge lying on the line adds nothing further.
/// - An edge whose endpoints are strictly on opposite sides gets its
///   intersection point inserted after the start vertex and marked.
/// - An edge touching the line at one endpoint relies on that endpoint's mark.
pub(super) fn augment_boundary(
    vertices: &[Point2],
    l1: &Point2,
    l2: &Point2,
    tolerance: f64,
) -> AugmentedBoundary {
    let n = vertices.len();
    let mut augmented = Vec::with_capacity(n * 2);
    let mut cut_indices = Vec::new();

    for (i, current) in vertices.iter().enumerate() {
        let next = &vertices[(i + 1) % n];

        augmented.push(*current);
        let current_index = augmented.len() - 1;

        let s_current = side_of_line_2d(l1, l2, current, tolerance);
        let s_next = side_of_line_2d(l1, l2, next, tolerance);

        // Marked before the collinear-edge skip so a vertex starting an
        // on-line edge is still registered. Each index is pushed at most once
        // since `current_index` is fresh on every iteration.
        if s_current == Side::On {
            cut_indices.push(current_index);
        }

        if s_current == Side::On && s_next == Side::On {
            continue;
        }

        if s_current.is_opposite(s_next) {
            if let Some(pt) = segment_line_intersect_2d(current, next, l1, l2, tolerance) {
                augmented.push(pt);
                cut_indices.push(augmented.len() - 1);
            }
        }
    }

    AugmentedBoundary {
        vertices: augmented,
        cut_indices,
    }
}
