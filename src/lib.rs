//! Bidirectional WKT geometry converter for the shape editor.
//!
//! This crate is the text side of the pad. It parses possibly multi-statement
//! WKT documents into renderable shapes with source-span tracking, and
//! serializes edited shapes back into canonical WKT text. The host editing
//! surface owns rendering, input handling, and persistence; it feeds text in
//! through [`parse_document`], gets shapes and per-statement spans back in a
//! [`ParseResult`], and exports the scene with [`write_scene`]. The span data
//! is what powers two-way hover highlighting between the text panel and the
//! board.
//!
//! Parsing is tolerant by statement: invalid clauses are dropped while the
//! rest of the document continues to parse, because documents are hand-edited
//! and transiently broken most of the time.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Coordinate and geometry tree model |
//! | [`scan`] | Bracket-balanced span scanner and statement segmenter |
//! | [`parse`] | List parsers, type dispatcher, and the document entry point |
//! | [`write`] | Canonical WKT serialization |
//! | [`scene`] | Renderable shapes, source spans, and the parse result |

pub mod geom;
pub mod parse;
pub mod scan;
pub mod scene;
pub mod write;

pub use geom::{Coord, Geometry, Ring, SUPPORTED_TYPES};
pub use parse::{DocumentError, ParseError, parse_document};
pub use scene::{ParseResult, Shape, Span, shapes_of};
pub use write::{write_scene, write_shape};
