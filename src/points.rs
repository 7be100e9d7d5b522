use super::core::{self, GeomResult, GeometryError};

/// A coordinate tuple with 2 or 3 values
///
/// Examples
/// ```rust
/// use wktparse::Coordinate;
/// let flat = Coordinate::new(0.2, -7.9).unwrap();
/// let raised = Coordinate::new_3d(0.2, -7.9, 12.0).unwrap();
/// assert_eq!(flat.dimension(), 2);
/// assert_eq!(raised.dimension(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    x: f64,
    y: f64,
    z: Option<f64>,
}

/// A single point
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coord: Coordinate,
}

/// A simple collection of points
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl Coordinate {
    /// Instantiate a 2D coordinate. Fails if either value is NaN or infinite.
    pub fn new(x: f64, y: f64) -> GeomResult<Self> {
        check_finite(&[x, y])?;
        Ok(Self { x, y, z: None })
    }

    /// Instantiate a 3D coordinate. Fails if any value is NaN or infinite.
    pub fn new_3d(x: f64, y: f64, z: f64) -> GeomResult<Self> {
        check_finite(&[x, y, z])?;
        Ok(Self { x, y, z: Some(z) })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Number of values in the tuple (2 or 3)
    pub fn dimension(&self) -> usize {
        if self.z.is_some() { 3 } else { 2 }
    }

    /// Return true if the coordinate is approximately equal to other.
    pub fn is_close(&self, other: &Coordinate) -> bool {
        let z_close = match (self.z, other.z) {
            (None, None) => true,
            (Some(a), Some(b)) => core::approx(a, b),
            _ => false,
        };
        core::approx(self.x, other.x) && core::approx(self.y, other.y) && z_close
    }
}

fn check_finite(values: &[f64]) -> GeomResult<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(GeometryError::NonFiniteCoordinate { value }),
        None => Ok(()),
    }
}

impl Point {
    pub fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Return true if the point is approximately equal to other.
    pub fn is_close(&self, other: &Point) -> bool {
        self.coord.is_close(&other.coord)
    }
}

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use wktparse::{Coordinate, MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![
    ///     Point::new(Coordinate::new(0.0, 0.0).unwrap()),
    ///     Point::new(Coordinate::new(0.0, 1.0).unwrap()),
    /// ])
    /// .unwrap();
    /// assert_eq!(my_points.points().len(), 2);
    /// ```
    pub fn new(points: Vec<Point>) -> GeomResult<Self> {
        if points.is_empty() {
            Err(GeometryError::EmptyGeometry {
                geometry: "MULTIPOINT",
            })
        } else {
            Ok(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
