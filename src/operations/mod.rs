mod cut;

pub use cut::PolygonCut;
