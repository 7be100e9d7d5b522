use super::Span;
use super::rings;
use crate::core::{GeomResult, GeometryError};
use crate::points::Coordinate;
use regex::Regex;
use std::sync::OnceLock;

const TOKEN: &str = r"\S+";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

// Get numeric token regex once to avoid recompilation (thread-safe)
fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN).unwrap())
}

/// Parses coordinate tuples, tracking the dimension shared by one geometry
pub(crate) struct CoordinateParser {
    check_dimensions: bool,
    dimension: Option<usize>,
}

impl CoordinateParser {
    pub(crate) fn new(check_dimensions: bool) -> Self {
        Self {
            check_dimensions,
            dimension: None,
        }
    }

    /// Parse a single coordinate tuple such as `10.2 5.1`
    pub(crate) fn coordinate(&mut self, span: Span) -> GeomResult<Coordinate> {
        let coord = read_tuple(span)?;
        if self.check_dimensions {
            match self.dimension {
                None => self.dimension = Some(coord.dimension()),
                Some(expected) if expected != coord.dimension() => {
                    return Err(GeometryError::DimensionMismatch {
                        expected,
                        found: coord.dimension(),
                        position: span.trim().start(),
                    });
                }
                Some(_) => (),
            }
        }
        Ok(coord)
    }

    /// Parse a comma separated list of coordinate tuples, e.g. `0 0, 1 1, 2 0`
    pub(crate) fn coordinate_list(&mut self, span: Span) -> GeomResult<Vec<Coordinate>> {
        let tuples = rings::split_top_level(span)?;
        let mut coords = Vec::with_capacity(tuples.len());
        for tuple in tuples {
            coords.push(self.coordinate(tuple)?);
        }
        Ok(coords)
    }
}

/// Parse one coordinate tuple made of 2 or 3 whitespace separated numbers
///
/// Examples
/// ```rust
/// use wktparse::{parse_tuple, Coordinate};
///
/// assert_eq!(parse_tuple("10.2 5.1").unwrap(), Coordinate::new(10.2, 5.1).unwrap());
/// assert!(parse_tuple("1 NaN").is_err());
/// ```
pub fn parse_tuple(text: &str) -> GeomResult<Coordinate> {
    read_tuple(Span::new(text))
}

fn read_tuple(span: Span) -> GeomResult<Coordinate> {
    let mut values = Vec::with_capacity(3);
    for m in token_re().find_iter(span.as_str()) {
        values.push(parse_number(m.as_str(), span.start() + m.start())?);
    }
    let position = span.trim().start();
    match values[..] {
        [] => Err(GeometryError::EmptyCoordinate { position }),
        [x, y] => Coordinate::new(x, y),
        [x, y, z] => Coordinate::new_3d(x, y, z),
        _ => Err(GeometryError::InvalidCoordinateSize {
            found: values.len(),
            position,
        }),
    }
}

// Parse a numeric token, rejecting NaN and infinities
fn parse_number(token: &str, position: usize) -> GeomResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GeometryError::MalformedCoordinate {
            token: token.to_string(),
            position,
        }),
    }
}
