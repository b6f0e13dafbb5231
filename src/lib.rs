pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolycutError, Result};
pub use geometry::{Line, Polygon};
pub use math::{Point2, TOLERANCE};
pub use operations::PolygonCut;
