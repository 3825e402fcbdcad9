//! Geometry model: coordinates and the parsed geometry tree.
//!
//! `Geometry` is the faithful structural reading of one WKT statement, before
//! multi-geometries are fanned out into renderable shapes. The parser builds
//! these values and [`crate::scene::shapes_of`] lifts them into the flat shape
//! list the editing surface consumes.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// The WKT type tags understood by the parser, in canonical spelling.
pub const SUPPORTED_TYPES: [&str; 7] = [
    "POINT",
    "LINESTRING",
    "MULTIPOINT",
    "MULTILINESTRING",
    "POLYGON",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION",
];

/// A 2D coordinate pair in world units.
///
/// Always finite: the parser rejects `NaN` and infinities at the ordinate
/// level, and any trailing Z/M ordinates in source text are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

/// An ordered run of coordinates forming one polygon boundary (outer or hole).
///
/// Rings are stored exactly as written; closure is applied at serialization
/// time, never to the stored data.
pub type Ring = Vec<Coord>;

/// A parsed WKT geometry value, one per statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// `POINT (x y)`
    Point(Coord),
    /// `LINESTRING (x y, x y, ...)`
    LineString(Vec<Coord>),
    /// `MULTIPOINT (x y, x y)` or `MULTIPOINT ((x y), (x y))`
    MultiPoint(Vec<Coord>),
    /// `MULTILINESTRING ((x y, ...), (x y, ...))`
    MultiLineString(Vec<Vec<Coord>>),
    /// `POLYGON ((outer), (hole), ...)`
    Polygon(Vec<Ring>),
    /// `MULTIPOLYGON (((outer), ...), ((outer), ...))`
    MultiPolygon(Vec<Vec<Ring>>),
    /// `GEOMETRYCOLLECTION (member, member, ...)`, arbitrarily nested.
    Collection(Vec<Geometry>),
}
