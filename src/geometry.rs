use super::core::{GeomResult, GeometryError};
use super::linestring::{LineString, MultiLineString};
use super::parser;
use super::points::{Coordinate, MultiPoint, Point};
use super::polygons::{MultiPolygon, Polygon};
use std::str::FromStr;

/// Base kind named by a geometry keyword, without the `MULTI` prefix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomKind {
    Point,
    LineString,
    Polygon,
    Collection,
}

/// Any geometry produced by the parser
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

/// A non-empty, possibly heterogeneous list of geometries
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryCollection {
    members: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(members: Vec<Geometry>) -> GeomResult<Self> {
        if members.is_empty() {
            Err(GeometryError::EmptyGeometry {
                geometry: "GEOMETRYCOLLECTION",
            })
        } else {
            Ok(Self { members })
        }
    }

    pub fn members(&self) -> &[Geometry] {
        &self.members
    }
}

impl Geometry {
    pub fn kind(&self) -> GeomKind {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => GeomKind::Point,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => GeomKind::LineString,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => GeomKind::Polygon,
            Geometry::GeometryCollection(_) => GeomKind::Collection,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_)
        )
    }

    /// The keyword introducing this geometry in text form
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "POINT",
            Geometry::LineString(_) => "LINESTRING",
            Geometry::Polygon(_) => "POLYGON",
            Geometry::MultiPoint(_) => "MULTIPOINT",
            Geometry::MultiLineString(_) => "MULTILINESTRING",
            Geometry::MultiPolygon(_) => "MULTIPOLYGON",
            Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        }
    }

    /// Number of direct parts: rings for a polygon, members for multi geometries
    /// and collections, 1 otherwise.
    pub fn num_parts(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) => 1,
            Geometry::Polygon(poly) => poly.rings().len(),
            Geometry::MultiPoint(mp) => mp.points().len(),
            Geometry::MultiLineString(ml) => ml.lines().len(),
            Geometry::MultiPolygon(mp) => mp.polygons().len(),
            Geometry::GeometryCollection(gc) => gc.members().len(),
        }
    }

    /// All coordinates in the geometry, in document order
    pub fn coords(&self) -> Vec<&Coordinate> {
        let mut out = Vec::new();
        self.collect_coords(&mut out);
        out
    }

    fn collect_coords<'a>(&'a self, out: &mut Vec<&'a Coordinate>) {
        match self {
            Geometry::Point(pt) => out.push(pt.coord()),
            Geometry::LineString(ls) => out.extend(ls.coords()),
            Geometry::Polygon(poly) => out.extend(poly.rings().iter().flatten()),
            Geometry::MultiPoint(mp) => out.extend(mp.points().iter().map(Point::coord)),
            Geometry::MultiLineString(ml) => {
                out.extend(ml.lines().iter().flat_map(LineString::coords))
            }
            Geometry::MultiPolygon(mp) => out.extend(
                mp.polygons()
                    .iter()
                    .flat_map(|poly| poly.rings().iter().flatten()),
            ),
            Geometry::GeometryCollection(gc) => {
                for member in gc.members() {
                    member.collect_coords(out);
                }
            }
        }
    }

    pub fn num_coords(&self) -> usize {
        self.coords().len()
    }

    /// Dimension of the first coordinate
    pub fn dimension(&self) -> usize {
        self.first_coord().dimension()
    }

    // Every geometry holds at least one coordinate
    fn first_coord(&self) -> &Coordinate {
        match self {
            Geometry::Point(pt) => pt.coord(),
            Geometry::LineString(ls) => &ls.coords()[0],
            Geometry::Polygon(poly) => &poly.exterior()[0],
            Geometry::MultiPoint(mp) => mp.points()[0].coord(),
            Geometry::MultiLineString(ml) => &ml.lines()[0].coords()[0],
            Geometry::MultiPolygon(mp) => &mp.polygons()[0].exterior()[0],
            Geometry::GeometryCollection(gc) => gc.members()[0].first_coord(),
        }
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
