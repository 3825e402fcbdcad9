//! WKT parsing: ordinate and list parsers, the type dispatcher, and the
//! document entry point.
//!
//! Parsing is tolerant across statements and strict within one. Documents are
//! hand-edited and spend most of their life transiently invalid, so a
//! statement that fails (unknown tag, bad number, unbalanced body) is dropped
//! with a debug event while the rest of the document parses normally. Only a
//! non-blank document that yields nothing at all is reported to the caller.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use tracing::debug;

use crate::geom::{Coord, Geometry, Ring, SUPPORTED_TYPES};
use crate::scan;
use crate::scene::{self, ParseResult};

/// Why a single statement was dropped. Never aborts the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The statement's type word is not a supported WKT tag.
    #[error("unsupported geometry type: {0}")]
    UnsupportedType(String),
    /// A parenthesis opened inside the statement never closes.
    #[error("unbalanced parentheses")]
    Unbalanced,
    /// An x or y ordinate is not a finite number.
    #[error("malformed ordinate: {0}")]
    BadNumber(String),
    /// A coordinate has fewer than two ordinates.
    #[error("incomplete coordinate: {0}")]
    IncompleteCoordinate(String),
    /// A ring or group list contains no parenthesized groups.
    #[error("empty geometry body")]
    EmptyBody,
}

/// Error for a whole document that produced nothing renderable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The document is non-blank but no statement yielded a shape.
    #[error("no geometry recognized; supported types: {}", SUPPORTED_TYPES.join(", "))]
    NoGeometry,
}

/// Parse a whole WKT document into shapes plus statement correlation data.
///
/// The segmenter carves the text into statements; each is dispatched
/// independently, and a failure drops only that statement. Spans are recorded
/// for every statement that parses, including `EMPTY` ones that contribute no
/// shape, so caret lookups keep working on them.
///
/// # Errors
///
/// Returns [`DocumentError::NoGeometry`] when the document is non-blank but
/// no statement produced a shape. Blank input is an empty result, not an
/// error.
pub fn parse_document(text: &str) -> Result<ParseResult, DocumentError> {
    let mut result = ParseResult::default();

    for statement in scan::statements(text) {
        match geometry(statement.tag, statement.body) {
            Ok(parsed) => {
                let index = result.statement_spans.len();
                result.statement_spans.push(statement.span);
                if let Some(value) = parsed {
                    for shape in scene::shapes_of(value) {
                        result.shapes.push(shape);
                        result.shape_to_statement.push(index);
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, offset = statement.span.start, "dropping statement");
            }
        }
    }

    if result.shapes.is_empty() && !text.trim().is_empty() {
        return Err(DocumentError::NoGeometry);
    }
    Ok(result)
}

/// Build a geometry value from a statement's tag and body.
///
/// Tags match case-insensitively. A `None` body is the `TAG EMPTY` form: a
/// valid statement with nothing to render, returned as `Ok(None)`.
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedType`] for a tag outside
/// [`SUPPORTED_TYPES`], or the structural or numeric error that failed the
/// body. Either way the statement contributes nothing; callers decide whether
/// to drop it or surface the reason.
pub fn geometry(tag: &str, body: Option<&str>) -> Result<Option<Geometry>, ParseError> {
    let upper = tag.to_ascii_uppercase();
    if !SUPPORTED_TYPES.contains(&upper.as_str()) {
        return Err(ParseError::UnsupportedType(tag.to_owned()));
    }
    let Some(body) = body else {
        return Ok(None);
    };

    let parsed = match upper.as_str() {
        "POINT" => Geometry::Point(coord(body)?),
        "LINESTRING" => Geometry::LineString(coord_list(body)?),
        "MULTIPOINT" => Geometry::MultiPoint(multi_point_body(body)?),
        "MULTILINESTRING" => Geometry::MultiLineString(ring_list(body)?),
        "POLYGON" => Geometry::Polygon(ring_list(body)?),
        "MULTIPOLYGON" => Geometry::MultiPolygon(polygon_group_list(body)?),
        // The support check leaves only GEOMETRYCOLLECTION here.
        _ => Geometry::Collection(collection_members(body)),
    };
    Ok(Some(parsed))
}

/// Parse every member clause of a `GEOMETRYCOLLECTION` body.
///
/// Members are found with the same segmenter that carves whole documents, so
/// nesting behaves identically at every depth. A member that fails to parse
/// is skipped without failing the collection.
fn collection_members(body: &str) -> Vec<Geometry> {
    scan::statements(body)
        .into_iter()
        .filter_map(|member| match geometry(member.tag, member.body) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, tag = member.tag, "skipping collection member");
                None
            }
        })
        .collect()
}

/// Parse one `x y` pair, ignoring any trailing Z/M ordinates.
fn coord(text: &str) -> Result<Coord, ParseError> {
    let mut tokens = text.split_whitespace();
    let Some(x) = tokens.next() else {
        return Err(ParseError::IncompleteCoordinate(text.trim().to_owned()));
    };
    let Some(y) = tokens.next() else {
        return Err(ParseError::IncompleteCoordinate(text.trim().to_owned()));
    };
    Ok(Coord { x: ordinate(x)?, y: ordinate(y)? })
}

/// Parse a single ordinate token.
///
/// `NaN`, `inf`, and overflowing literals all parse as `f64` in Rust, so the
/// finite check is explicit; every stored coordinate stays finite.
fn ordinate(token: &str) -> Result<f64, ParseError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ParseError::BadNumber(token.to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::BadNumber(token.to_owned()))
    }
}

/// Parse a comma-separated run of coordinates.
fn coord_list(text: &str) -> Result<Vec<Coord>, ParseError> {
    text.split(',').map(coord).collect()
}

/// Parse a body of parenthesized groups, each holding a coordinate run.
///
/// Serves both polygons (outer ring plus holes) and multi-linestrings (one
/// group per line).
fn ring_list(text: &str) -> Result<Vec<Ring>, ParseError> {
    let groups = group_bodies(text)?;
    if groups.is_empty() {
        return Err(ParseError::EmptyBody);
    }
    groups.into_iter().map(coord_list).collect()
}

/// Parse a body of parenthesized ring groups, the `MULTIPOLYGON` form.
fn polygon_group_list(text: &str) -> Result<Vec<Vec<Ring>>, ParseError> {
    let groups = group_bodies(text)?;
    if groups.is_empty() {
        return Err(ParseError::EmptyBody);
    }
    groups.into_iter().map(ring_list).collect()
}

/// Parse a `MULTIPOINT` body in either of its two surface forms.
///
/// WKT allows both `10 40, 40 30` and `(10 40), (40 30)`; the parenthesized
/// form is detected by the presence of a group, and each group contributes
/// its first coordinate.
fn multi_point_body(text: &str) -> Result<Vec<Coord>, ParseError> {
    if text.contains('(') {
        let rings = ring_list(text)?;
        return Ok(rings.into_iter().filter_map(|ring| ring.first().copied()).collect());
    }
    coord_list(text)
}

/// Slice out the interiors of every top-level `( ... )` group in `text`.
fn group_bodies(text: &str) -> Result<Vec<&str>, ParseError> {
    let bytes = text.as_bytes();
    let mut bodies = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'(' {
            let close = scan::matching_paren(text, pos).ok_or(ParseError::Unbalanced)?;
            bodies.push(&text[pos + 1..close]);
            pos = close + 1;
        } else {
            pos += 1;
        }
    }
    Ok(bodies)
}
