use super::core::{GeomResult, GeometryError};
use super::points::Coordinate;

/// Represents a sequence of line segments
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    coords: Vec<Coordinate>,
}

/// A collection of line strings
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl LineString {
    /// Instantiate a new LineString from a vector of coordinates
    pub fn new(coords: Vec<Coordinate>) -> GeomResult<Self> {
        if coords.len() < 2 {
            Err(GeometryError::TooFewCoordinates {
                geometry: "LINESTRING",
                found: coords.len(),
                minimum: 2,
            })
        } else {
            Ok(Self { coords })
        }
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> GeomResult<Self> {
        if lines.is_empty() {
            Err(GeometryError::EmptyGeometry {
                geometry: "MULTILINESTRING",
            })
        } else {
            Ok(Self { lines })
        }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }
}
