use super::core::{GeomResult, GeometryError};
use super::points::Coordinate;

/// Represents a polygon: an exterior ring followed by zero or more holes
///
/// Ring closure (first coordinate equal to the last) is not enforced here; the
/// parser checks it only when asked to.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<Coordinate>>,
}

/// A collection of polygons
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl Polygon {
    /// Instantiate a polygon from its rings, exterior ring first
    ///
    /// Examples
    /// ```rust
    /// use wktparse::{Coordinate, Polygon};
    /// let triangle = vec![
    ///     Coordinate::new(0.0, 1.0).unwrap(),
    ///     Coordinate::new(0.0, 0.0).unwrap(),
    ///     Coordinate::new(1.0, 0.0).unwrap(),
    ///     Coordinate::new(0.0, 1.0).unwrap(),
    /// ];
    /// let poly = Polygon::new(vec![triangle]).unwrap();
    /// assert_eq!(poly.interiors().len(), 0);
    /// ```
    pub fn new(rings: Vec<Vec<Coordinate>>) -> GeomResult<Self> {
        if rings.is_empty() {
            return Err(GeometryError::EmptyGeometry {
                geometry: "POLYGON",
            });
        }
        if let Some(short) = rings.iter().find(|ring| ring.len() < 3) {
            return Err(GeometryError::TooFewCoordinates {
                geometry: "POLYGON ring",
                found: short.len(),
                minimum: 3,
            });
        }
        Ok(Self { rings })
    }

    pub fn exterior(&self) -> &[Coordinate] {
        &self.rings[0]
    }

    pub fn interiors(&self) -> &[Vec<Coordinate>] {
        &self.rings[1..]
    }

    pub fn rings(&self) -> &[Vec<Coordinate>] {
        &self.rings
    }
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> GeomResult<Self> {
        if polygons.is_empty() {
            Err(GeometryError::EmptyGeometry {
                geometry: "MULTIPOLYGON",
            })
        } else {
            Ok(Self { polygons })
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}
