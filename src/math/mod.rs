pub mod intersect_2d;
pub mod polygon_2d;
pub mod side_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Shared by side classification, the intersection denominator test and the
/// degenerate-area filter.
pub const TOLERANCE: f64 = 1e-9;
