use super::coords::CoordinateParser;
use super::keyword::PartKind;
use super::{ParseOptions, Span, rings};
use crate::core::{GeomResult, GeometryError};
use crate::geometry::Geometry;
use crate::linestring::{LineString, MultiLineString};
use crate::points::{Coordinate, MultiPoint, Point};
use crate::polygons::{MultiPolygon, Polygon};

/// Builds one simple or multi geometry from the payload following its keyword
///
/// A builder is used for a single geometry, so every coordinate it reads is held to
/// the same dimension when dimension checks are enabled.
pub(crate) struct GeometryBuilder<'o> {
    options: &'o ParseOptions,
    coords: CoordinateParser,
}

impl<'o> GeometryBuilder<'o> {
    pub(crate) fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            coords: CoordinateParser::new(options.check_dimensions),
        }
    }

    pub(crate) fn build(
        mut self,
        part: PartKind,
        multi: bool,
        payload: Span,
    ) -> GeomResult<Geometry> {
        let geom = match (part, multi) {
            (PartKind::Point, false) => Geometry::Point(self.point(payload)?),
            (PartKind::LineString, false) => Geometry::LineString(self.linestring(payload)?),
            (PartKind::Polygon, false) => Geometry::Polygon(self.polygon(payload)?),
            (PartKind::Point, true) => Geometry::MultiPoint(self.multi_point(payload)?),
            (PartKind::LineString, true) => {
                Geometry::MultiLineString(self.multi_linestring(payload)?)
            }
            (PartKind::Polygon, true) => Geometry::MultiPolygon(self.multi_polygon(payload)?),
        };
        Ok(geom)
    }

    // (x y)
    fn point(&mut self, body: Span) -> GeomResult<Point> {
        let inner = rings::strip_parens(body)?;
        if let Some(extra) = rings::split_top_level(inner)?.get(1) {
            return Err(GeometryError::ExtraCoordinate {
                position: extra.trim().start(),
            });
        }
        Ok(Point::new(self.coords.coordinate(inner)?))
    }

    // (x y, x y, ...)
    fn linestring(&mut self, body: Span) -> GeomResult<LineString> {
        let inner = rings::strip_parens(body)?;
        LineString::new(self.coords.coordinate_list(inner)?)
    }

    // ((x y, ...), (x y, ...))
    fn polygon(&mut self, body: Span) -> GeomResult<Polygon> {
        let parts = rings::split_parts(body)?;
        let mut rings = Vec::with_capacity(parts.len());
        for ring in parts {
            rings.push(self.ring(ring)?);
        }
        Polygon::new(rings)
    }

    fn ring(&mut self, body: Span) -> GeomResult<Vec<Coordinate>> {
        let inner = rings::strip_parens(body)?;
        let coords = self.coords.coordinate_list(inner)?;
        if coords.len() < 3 {
            return Err(GeometryError::TooFewCoordinates {
                geometry: "POLYGON ring",
                found: coords.len(),
                minimum: 3,
            });
        }
        if self.options.require_closed_rings && coords.first() != coords.last() {
            return Err(GeometryError::UnclosedRing {
                position: body.start(),
            });
        }
        Ok(coords)
    }

    // Members may be bare tuples `(1 1, 2 2)` or parenthesized `((1 1), (2 2))`
    fn multi_point(&mut self, body: Span) -> GeomResult<MultiPoint> {
        let mut points = Vec::new();
        for member in rings::split_parts(body)? {
            if member.as_str().starts_with('(') {
                points.push(self.point(member)?);
            } else {
                points.push(Point::new(self.coords.coordinate(member)?));
            }
        }
        MultiPoint::new(points)
    }

    fn multi_linestring(&mut self, body: Span) -> GeomResult<MultiLineString> {
        let mut lines = Vec::new();
        for member in rings::split_parts(body)? {
            lines.push(self.linestring(member)?);
        }
        MultiLineString::new(lines)
    }

    fn multi_polygon(&mut self, body: Span) -> GeomResult<MultiPolygon> {
        let mut polygons = Vec::new();
        for member in rings::split_parts(body)? {
            polygons.push(self.polygon(member)?);
        }
        MultiPolygon::new(polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(part: PartKind, multi: bool, payload: &str) -> GeomResult<Geometry> {
        let options = ParseOptions::default();
        GeometryBuilder::new(&options).build(part, multi, Span::new(payload))
    }

    #[test]
    fn test_build_point() {
        match build(PartKind::Point, false, "(10.2 5.1)") {
            Ok(Geometry::Point(pt)) => {
                assert!(pt.is_close(&Point::new(Coordinate::new(10.2, 5.1).unwrap())))
            }
            other => panic!("Expected a point: {other:?}"),
        }

        match build(PartKind::Point, false, "(1 2, 3 4)") {
            Err(GeometryError::ExtraCoordinate { position: 6 }) => (),
            other => panic!("Expected extra coordinate: {other:?}"),
        }

        for bad in ["(0 1, 2 3)", "(0)", "((0 1))", "(0 1))", "0 1"] {
            if let Ok(_) = build(PartKind::Point, false, bad) {
                panic!("Parsed invalid point: {bad}");
            }
        }
    }

    #[test]
    fn test_build_linestring() {
        match build(PartKind::LineString, false, "(0 0, 1 1, 2 0)") {
            Ok(Geometry::LineString(ls)) => assert_eq!(ls.coords().len(), 3),
            other => panic!("Expected a linestring: {other:?}"),
        }

        match build(PartKind::LineString, false, "(0 0)") {
            Err(GeometryError::TooFewCoordinates { found: 1, minimum: 2, .. }) => (),
            other => panic!("Expected too few coordinates: {other:?}"),
        }
    }

    #[test]
    fn test_build_polygon_with_hole() {
        let payload = "((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 2))";
        match build(PartKind::Polygon, false, payload) {
            Ok(Geometry::Polygon(poly)) => {
                assert_eq!(poly.exterior().len(), 5);
                assert_eq!(poly.interiors().len(), 1);
                assert_eq!(poly.interiors()[0][1], Coordinate::new(4.0, 2.0).unwrap());
            }
            other => panic!("Expected a polygon: {other:?}"),
        }
    }

    #[test]
    fn test_build_polygon_invalid() {
        match build(PartKind::Polygon, false, "((0 0, 1 0), (2 2, 3 3, 4 4))") {
            Err(GeometryError::TooFewCoordinates { found: 2, minimum: 3, .. }) => (),
            other => panic!("Expected too few coordinates: {other:?}"),
        }

        if let Ok(_) = build(PartKind::Polygon, false, "(0 0, 1 0, 1 1, 0 0)") {
            panic!("Parsed invalid polygon (wrong parenthesis count)!");
        }

        if let Ok(_) = build(PartKind::Polygon, false, "((0 0, 1 0, 1 1, 0 0)") {
            panic!("Parsed invalid polygon (mismatched parentheses)!");
        }
    }

    #[test]
    fn test_build_multipoint_forms() {
        let bare = build(PartKind::Point, true, "(0 0, 1 0, 0.5 0.5, 0 1)").unwrap();
        let wrapped =
            build(PartKind::Point, true, "((0 0), (1 0), (0.5 0.5), (0 1))").unwrap();
        assert_eq!(bare, wrapped);
        match bare {
            Geometry::MultiPoint(mp) => {
                assert_eq!(mp.points().len(), 4);
                let expected = Point::new(Coordinate::new(0.5, 0.5).unwrap());
                assert!(mp.points()[2].is_close(&expected));
            }
            other => panic!("Expected a multipoint: {other:?}"),
        }
    }

    #[test]
    fn test_build_multilinestring() {
        // Whitespace around separators is irrelevant
        let payload = "((1 2, 3 4),(5 6, 7 8)  ,  (9 9, 8 8, 7 7))";
        match build(PartKind::LineString, true, payload) {
            Ok(Geometry::MultiLineString(ml)) => {
                assert_eq!(ml.lines().len(), 3);
                assert_eq!(ml.lines()[2].coords().len(), 3);
            }
            other => panic!("Expected a multilinestring: {other:?}"),
        }
    }

    #[test]
    fn test_build_multipolygon() {
        let payload = "(((0 0, 4 0, 4 4, 0 0), (1 1, 2 1, 2 2, 1 1)), ((10 10, 11 10, 11 11, 10 10)))";
        match build(PartKind::Polygon, true, payload) {
            Ok(Geometry::MultiPolygon(mp)) => {
                assert_eq!(mp.polygons().len(), 2);
                assert_eq!(mp.polygons()[0].rings().len(), 2);
                assert_eq!(mp.polygons()[1].rings().len(), 1);
            }
            other => panic!("Expected a multipolygon: {other:?}"),
        }
    }

    #[test]
    fn test_dimension_shared_across_parts() {
        match build(PartKind::LineString, true, "((1 2 3, 4 5 6), (7 8, 9 10))") {
            Err(GeometryError::DimensionMismatch { expected: 3, found: 2, .. }) => (),
            other => panic!("Expected dimension mismatch: {other:?}"),
        }

        match build(PartKind::Point, true, "(0 0 9.0, 1 0 -1, 0.5 0.5 0.2)") {
            Ok(geom) => assert_eq!(geom.dimension(), 3),
            Err(err) => panic!("Failed to parse 3D multipoint: {err}"),
        }
    }
}
