mod augment;

use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Line, Polygon};
use crate::math::polygon_2d::{extract_cycle, signed_area_2d};
use crate::math::TOLERANCE;

use augment::{augment_boundary, AugmentedBoundary};

/// Splits a polygon along an infinite line.
///
/// # Algorithm
///
/// 1. Walk the boundary, splicing in every strict crossing with the line and
///    recording the positions of all on-line points (cut indices).
/// 2. Pair each cut index with the next one (wrapping) and copy the boundary
///    run between them. The chord back to the start lies along the line.
/// 3. Keep runs with at least 3 vertices and an area above the tolerance.
///
/// Pairing adjacent cut indices assumes the boundary arcs alternate sides of
/// the line. That holds for convex polygons and for concave ones crossed an
/// even number of times, but a line grazing several separate concavities can
/// yield pieces that are not confined to one side.
///
/// If the line never meets the boundary, or no run encloses area, the result
/// is the input polygon alone.
#[derive(Debug)]
pub struct PolygonCut<'a> {
    polygon: &'a Polygon,
    line: &'a Line,
    tolerance: f64,
}

impl<'a> PolygonCut<'a> {
    /// Creates a cut of `polygon` by `line` using [`TOLERANCE`].
    #[must_use]
    pub fn new(polygon: &'a Polygon, line: &'a Line) -> Self {
        Self {
            polygon,
            line,
            tolerance: TOLERANCE,
        }
    }

    /// Overrides the tolerance used by every predicate of this cut.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the cut, returning the resulting polygons.
    ///
    /// The input polygon and line are never modified.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the polygon has fewer than 3 vertices
    /// - `OperationError::InvalidInput` if the tolerance is negative or not finite
    #[tracing::instrument(skip_all)]
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        let n = self.polygon.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "at least 3 vertices are required to cut a polygon, got {n}"
            ))
            .into());
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            ))
            .into());
        }

        let boundary = augment_boundary(
            self.polygon.vertices(),
            self.line.p1(),
            self.line.p2(),
            self.tolerance,
        );
        debug!(
            vertices = n,
            augmented = boundary.vertices.len(),
            cuts = boundary.cut_indices.len(),
            "augmented boundary"
        );

        if boundary.cut_indices.is_empty() {
            return Ok(vec![self.polygon.clone()]);
        }

        let pieces = partition(&boundary, self.tolerance);
        if pieces.is_empty() {
            debug!("no piece encloses area, keeping input polygon");
            return Ok(vec![self.polygon.clone()]);
        }
        Ok(pieces)
    }
}

/// Builds one candidate per pair of consecutive cut indices and drops the
/// degenerate ones.
fn partition(boundary: &AugmentedBoundary, tolerance: f64) -> Vec<Polygon> {
    let cuts = &boundary.cut_indices;
    let m = cuts.len();
    let mut pieces = Vec::with_capacity(m);

    for j in 0..m {
        let start = cuts[j];
        let end = cuts[(j + 1) % m];
        let cycle = extract_cycle(&boundary.vertices, start, end);

        if cycle.len() < 3 {
            trace!(start, end, len = cycle.len(), "dropping short cycle");
            continue;
        }
        let area = signed_area_2d(&cycle);
        if area.abs() <= tolerance {
            trace!(start, end, len = cycle.len(), area, "dropping zero-area cycle");
            continue;
        }
        pieces.push(Polygon::new(cycle));
    }

    pieces
}
