//! Polygon cutting demo.
//!
//! ```text
//! cargo run --example cut
//! RUST_LOG=polycut=debug cargo run --example cut
//! ```

use polycut::{Line, Point2, Polygon, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polycut.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polycut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run(
        "RECTANGLE",
        &Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]),
        &Line::new(Point2::new(-1.0, 1.5), Point2::new(5.0, 1.5))?,
    )?;

    run(
        "CONVEX POLYGON (HEXAGON)",
        &Polygon::from_coords(&[
            (2.0, 1.0),
            (4.0, 1.0),
            (5.0, 2.0),
            (4.0, 3.0),
            (2.0, 3.0),
            (1.0, 2.0),
        ]),
        &Line::new(Point2::new(0.0, 0.0), Point2::new(6.0, 4.0))?,
    )?;

    run(
        "CONCAVE POLYGON (SHAPE OF 'C')",
        &Polygon::from_coords(&[
            (0.0, 3.0),
            (4.0, 3.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 1.0),
            (4.0, 1.0),
            (4.0, 0.0),
            (0.0, 0.0),
        ]),
        &Line::new(Point2::new(2.0, -1.0), Point2::new(2.0, 4.0))?,
    )?;

    Ok(())
}

fn run(title: &str, polygon: &Polygon, line: &Line) -> Result<()> {
    println!("=== {title} ===");
    println!("Original polygon: {polygon}");
    println!("Line: {line}");
    println!("Resulting polygons:");
    for piece in polygon.cut(line)? {
        println!("{piece}  [area {}]", piece.area());
    }
    println!();
    Ok(())
}
