use thiserror::Error;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-9;

/// Errors raised while parsing geometry text or constructing geometries.
///
/// Every parsing error carries the byte offset into the original input where the
/// problem was found.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("unknown geometry type '{keyword}' at position {position}")]
    UnknownGeometryType { keyword: String, position: usize },

    #[error("unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },

    #[error("expected '(' at position {position}")]
    ExpectedParenthesis { position: usize },

    #[error("trailing characters after geometry at position {position}")]
    TrailingCharacters { position: usize },

    #[error("empty coordinate group at position {position}")]
    EmptyCoordinate { position: usize },

    #[error("geometry collection at position {position} has no members")]
    EmptyCollection { position: usize },

    #[error("malformed coordinate '{token}' at position {position}")]
    MalformedCoordinate { token: String, position: usize },

    #[error("coordinate at position {position} has {found} values, expected 2 or 3")]
    InvalidCoordinateSize { found: usize, position: usize },

    #[error("unexpected extra coordinate at position {position}")]
    ExtraCoordinate { position: usize },

    #[error("coordinate at position {position} has {found} values, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        position: usize,
    },

    #[error("{geometry} needs at least {minimum} coordinates, got {found}")]
    TooFewCoordinates {
        geometry: &'static str,
        found: usize,
        minimum: usize,
    },

    #[error("{geometry} needs at least one part")]
    EmptyGeometry { geometry: &'static str },

    #[error("ring at position {position} is not closed")]
    UnclosedRing { position: usize },

    #[error("geometry collections nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("coordinate value {value} is not finite")]
    NonFiniteCoordinate { value: f64 },
}

/// Name used by callers of [`crate::parse`].
pub type ParseError = GeometryError;

pub type GeomResult<T> = Result<T, GeometryError>;

/// Return whether two numbers are approximately equal.
///
/// Determines if the given numbers are close with the given absolute and relative tolerances.
/// Negative tolerances are treated as zero.
///
/// Examples:
/// ```rust
/// use wktparse;
///
/// println!("Close: {}", wktparse::is_close(0.0, 0.0, 1e-10, 1e-10));
/// ```
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= (atol.max(0.0) + rtol.max(0.0) * scale)
}

/// Determine if two values are approximately equal to one another.
///
/// This is equivalent to calling `is_close` with relative tolerance of `1e-9`
/// and absolute tolerance of `1e-12`.
///
/// Example:
/// ```rust
/// let x1 = 0.123;
/// let x2 = 0.123 + 1e-14;
///
/// assert!(wktparse::approx(x1, x2));
/// ```
pub fn approx(a: f64, b: f64) -> bool {
    is_close(a, b, RTOL, ATOL)
}
