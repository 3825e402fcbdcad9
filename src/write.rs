//! WKT serialization: shapes back to canonical statement text.
//!
//! The inverse of [`crate::parse`]. Output is canonical rather than faithful:
//! open rings are closed, multi-point statements come back as one `POINT` per
//! shape, and a line shape picks its envelope from its part count. Numbers
//! are written in their natural decimal form; rounding policy belongs to the
//! caller, not here.

#[cfg(test)]
#[path = "write_test.rs"]
mod write_test;

use crate::geom::Coord;
use crate::scene::Shape;

/// Serialize a whole scene as one newline-joined WKT document.
///
/// Shapes that cannot classify are excluded silently, so an export always
/// succeeds with whatever is expressible.
#[must_use]
pub fn write_scene(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .filter_map(write_shape)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize one shape as a WKT statement.
///
/// Returns `None` for a line with no parts or a polygon with no rings; such
/// shapes have no WKT rendering and are left out of scene exports.
#[must_use]
pub fn write_shape(shape: &Shape) -> Option<String> {
    match shape {
        Shape::Point { at } => Some(format!("POINT ({})", pair(*at))),
        Shape::Line { parts } => write_line(parts),
        Shape::Polygon { rings } => write_polygon(rings),
    }
}

/// One part is a `LINESTRING`, several are a `MULTILINESTRING`.
fn write_line(parts: &[Vec<Coord>]) -> Option<String> {
    match parts {
        [] => None,
        [part] => Some(format!("LINESTRING ({})", run(part))),
        _ => {
            let groups = parts
                .iter()
                .map(|part| format!("({})", run(part)))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("MULTILINESTRING ({groups})"))
        }
    }
}

fn write_polygon(rings: &[Vec<Coord>]) -> Option<String> {
    if rings.is_empty() {
        return None;
    }
    let groups = rings
        .iter()
        .map(|ring| format!("({})", closed_run(ring)))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("POLYGON ({groups})"))
}

/// Format one coordinate as `x y`.
fn pair(coord: Coord) -> String {
    format!("{} {}", coord.x, coord.y)
}

/// Format a comma-joined coordinate run.
fn run(coords: &[Coord]) -> String {
    coords
        .iter()
        .map(|coord| pair(*coord))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a ring, appending the first coordinate when the ring is open.
///
/// Closure compares first and last by exact equality and is decided fresh on
/// every write; the stored ring is never mutated.
fn closed_run(ring: &[Coord]) -> String {
    let mut text = run(ring);
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            text.push_str(", ");
            text.push_str(&pair(*first));
        }
    }
    text
}
