//! Renderable scene types: shapes, source spans, and the parse result.
//!
//! `Shape` is the unit the editing surface consumes. Every leaf geometry in a
//! parsed document is lifted into exactly one shape, with its kind fixed at
//! construction so downstream code never has to inspect coordinate structure
//! to decide what it is looking at. `ParseResult` bundles the shapes with the
//! source span of each recognized statement and the shape-to-statement
//! correlation that powers two-way hover highlighting.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Coord, Geometry, Ring};

/// Byte range of one WKT statement within the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the statement's first byte.
    pub start: usize,
    /// Offset one past the statement's last byte.
    pub end: usize,
}

impl Span {
    /// Whether a caret offset falls on this statement.
    ///
    /// Inclusive on both sides, so a caret sitting immediately after the
    /// closing parenthesis still selects the statement it follows.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// A renderable shape lifted from one leaf geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// A single marker point.
    Point {
        /// Position of the marker.
        at: Coord,
    },
    /// A polyline with one or more independent parts.
    Line {
        /// Each part is drawn as its own open polyline.
        parts: Vec<Vec<Coord>>,
    },
    /// A filled region.
    Polygon {
        /// Outer boundary first, holes after.
        rings: Vec<Ring>,
    },
}

/// Everything one document parse produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Renderable shapes in document order.
    pub shapes: Vec<Shape>,
    /// Source span of every recognized statement, in document order.
    pub statement_spans: Vec<Span>,
    /// For each shape, the index into `statement_spans` it came from.
    pub shape_to_statement: Vec<usize>,
}

impl ParseResult {
    /// Index of the statement whose span contains `offset`, if any.
    ///
    /// Returns `None` when the caret sits in inter-statement text.
    #[must_use]
    pub fn statement_at(&self, offset: usize) -> Option<usize> {
        self.statement_spans.iter().position(|span| span.contains(offset))
    }

    /// Source span of the statement that produced the shape at `shape`.
    #[must_use]
    pub fn span_of_shape(&self, shape: usize) -> Option<Span> {
        let statement = *self.shape_to_statement.get(shape)?;
        self.statement_spans.get(statement).copied()
    }

    /// Indices of every shape the statement at `statement` produced.
    ///
    /// A collection or multi-geometry statement maps to several shapes; an
    /// `EMPTY` statement maps to none.
    #[must_use]
    pub fn statement_shapes(&self, statement: usize) -> Vec<usize> {
        self.shape_to_statement
            .iter()
            .enumerate()
            .filter(|(_, owner)| **owner == statement)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Lift a parsed geometry into renderable shapes.
///
/// Multi-point and multi-polygon values fan out into one shape per member so
/// each can be selected and edited independently. A multi-line value stays a
/// single shape with one part per line. Collections flatten recursively, so
/// arbitrary nesting always lands in the same flat list.
#[must_use]
pub fn shapes_of(geometry: Geometry) -> Vec<Shape> {
    match geometry {
        Geometry::Point(at) => vec![Shape::Point { at }],
        Geometry::LineString(coords) => vec![Shape::Line { parts: vec![coords] }],
        Geometry::MultiPoint(coords) => coords.into_iter().map(|at| Shape::Point { at }).collect(),
        Geometry::MultiLineString(parts) => vec![Shape::Line { parts }],
        Geometry::Polygon(rings) => vec![Shape::Polygon { rings }],
        Geometry::MultiPolygon(groups) => {
            groups.into_iter().map(|rings| Shape::Polygon { rings }).collect()
        }
        Geometry::Collection(members) => members.into_iter().flat_map(shapes_of).collect(),
    }
}
