use std::fmt;

use crate::error::Result;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::operations::PolygonCut;

use super::{DisplayPoint, Line};

/// A closed polygon given by its vertex sequence.
///
/// The edge from the last vertex back to the first is implicit. Orientation
/// is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Returns the vertex sequence.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace signed area; positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Splits this polygon along `line`.
    ///
    /// Shorthand for `PolygonCut::new(self, line).execute()`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than
    /// 3 vertices.
    pub fn cut(&self, line: &Line) -> Result<Vec<Polygon>> {
        PolygonCut::new(self, line).execute()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon:")?;
        for v in &self.vertices {
            write!(f, " {}", DisplayPoint(v))?;
        }
        Ok(())
    }
}
