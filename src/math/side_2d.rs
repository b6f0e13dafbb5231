use super::Point2;

/// Half-plane a point occupies relative to a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise of the line direction (positive cross product).
    Left,
    /// Clockwise of the line direction (negative cross product).
    Right,
    /// Within tolerance of the line.
    On,
}

impl Side {
    /// Returns `+1`, `-1` or `0`.
    #[must_use]
    pub fn signum(self) -> i8 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
            Side::On => 0,
        }
    }

    /// Returns `true` if both sides are strict and differ.
    #[must_use]
    pub fn is_opposite(self, other: Side) -> bool {
        self.signum() * other.signum() < 0
    }
}

/// Classifies `p` against the infinite line through `a` and `b`.
///
/// Uses the cross product of `b - a` with `p - a`; magnitudes within
/// `tolerance` count as collinear.
#[must_use]
pub fn side_of_line_2d(a: &Point2, b: &Point2, p: &Point2, tolerance: f64) -> Side {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross > tolerance {
        Side::Left
    } else if cross < -tolerance {
        Side::Right
    } else {
        Side::On
    }
}
