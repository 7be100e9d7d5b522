use super::core::GeomResult;
use super::geometry::Geometry;

mod builder;
mod collection;
mod coords;
mod keyword;
mod rings;

pub use coords::parse_tuple;

const DEFAULT_MAX_DEPTH: usize = 32;

/// Strictness settings for the parser
///
/// The defaults check that coordinates within one geometry share a dimension, leave
/// polygon rings unchecked for closure and allow collections nested 32 levels deep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub check_dimensions: bool,
    pub require_closed_rings: bool,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            check_dimensions: true,
            require_closed_rings: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_dimension_check(mut self, enabled: bool) -> Self {
        self.check_dimensions = enabled;
        self
    }

    pub fn with_closed_rings(mut self, required: bool) -> Self {
        self.require_closed_rings = required;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Slice of the input text that remembers its byte offset in the original string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Span<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Span<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, start: 0 }
    }

    pub(crate) fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first character in the original input
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sub-span over the byte range `from..to` of this span
    pub(crate) fn slice(&self, from: usize, to: usize) -> Span<'a> {
        Span {
            text: &self.text[from..to],
            start: self.start + from,
        }
    }

    pub(crate) fn trim(&self) -> Span<'a> {
        let lead = self.text.len() - self.text.trim_start().len();
        Span {
            text: self.text.trim(),
            start: self.start + lead,
        }
    }
}

/// Parse a geometry string with the default options
///
/// Returns the parsed geometry, or the first error found anywhere in the input.
///
/// Examples
/// ```rust
/// use wktparse::{self, Geometry, GeometryError};
///
/// match wktparse::parse("POLYGON ((10.2 5.1, 11.5 2.5, 5.6 8.5, 10.2 5.1))") {
///     Ok(Geometry::Polygon(poly)) => assert_eq!(poly.exterior().len(), 4),
///     other => panic!("Expected a polygon, got {other:?}"),
/// }
///
/// match wktparse::parse("POINT (a b)") {
///     Err(GeometryError::MalformedCoordinate { token, .. }) => assert_eq!(token, "a"),
///     other => panic!("Expected an error, got {other:?}"),
/// }
/// ```
pub fn parse(text: &str) -> GeomResult<Geometry> {
    parse_with(text, &ParseOptions::default())
}

/// Parse a geometry string with explicit strictness options
///
/// Example
/// ```rust
/// use wktparse::{GeometryError, ParseOptions};
///
/// let strict = ParseOptions::default().with_closed_rings(true);
/// let res = wktparse::parse_with("POLYGON ((0 0, 1 0, 1 1))", &strict);
/// assert!(matches!(res, Err(GeometryError::UnclosedRing { .. })));
/// ```
pub fn parse_with(text: &str, options: &ParseOptions) -> GeomResult<Geometry> {
    collection::parse_geometry(Span::new(text), options, 0)
}
