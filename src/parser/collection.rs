use super::builder::GeometryBuilder;
use super::keyword::{self, GeomType};
use super::{ParseOptions, Span, rings};
use crate::core::{GeomResult, GeometryError};
use crate::geometry::{Geometry, GeometryCollection};
use log::debug;

/// Parse any geometry, recursing into collection members
///
/// `depth` counts the collections enclosing `text`; the top level is 0.
pub(crate) fn parse_geometry(
    text: Span,
    options: &ParseOptions,
    depth: usize,
) -> GeomResult<Geometry> {
    let (geom_type, payload) = keyword::identify_type(text)?;
    debug!(
        "Detected {:?} geometry (multi: {}) at position {}",
        geom_type.kind(),
        geom_type.is_multi(),
        text.trim().start()
    );
    match geom_type {
        GeomType::Collection => parse_collection(payload, options, depth),
        GeomType::Single(part) => GeometryBuilder::new(options).build(part, false, payload),
        GeomType::Multi(part) => GeometryBuilder::new(options).build(part, true, payload),
    }
}

// Body of a GEOMETRYCOLLECTION: "(" geometry ("," geometry)* ")"
fn parse_collection(payload: Span, options: &ParseOptions, depth: usize) -> GeomResult<Geometry> {
    if depth > options.max_depth {
        return Err(GeometryError::NestingTooDeep {
            limit: options.max_depth,
        });
    }

    let inner = rings::strip_parens(payload)?;
    if inner.trim().is_empty() {
        return Err(GeometryError::EmptyCollection {
            position: payload.trim().start(),
        });
    }

    let members = rings::split_top_level(inner)?;
    let mut geoms = Vec::with_capacity(members.len());
    for member in members {
        geoms.push(parse_geometry(member, options, depth + 1)?);
    }
    debug!(
        "Built collection with {} members at depth {}",
        geoms.len(),
        depth
    );
    Ok(Geometry::GeometryCollection(GeometryCollection::new(geoms)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeomKind;
    use crate::parser::{parse, parse_with};

    #[test]
    fn test_parse_collection_mixed() {
        let text = "GEOMETRYCOLLECTION (POINT (4 6), LINESTRING (4 6, 7 10), POLYGON ((0 0, 1 0, 1 1, 0 0)), MULTIPOINT (1 1, 2 2))";
        match parse(text) {
            Ok(Geometry::GeometryCollection(gc)) => {
                let kinds: Vec<&str> = gc.members().iter().map(|g| g.type_name()).collect();
                assert_eq!(kinds, vec!["POINT", "LINESTRING", "POLYGON", "MULTIPOINT"]);
            }
            other => panic!("Expected a collection: {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_collections() {
        let text = "GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (POINT (1 1), GEOMETRYCOLLECTION (POINT (2 2))), MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0))))";
        match parse(text) {
            Ok(Geometry::GeometryCollection(gc)) => {
                let members = gc.members();
                assert_eq!(members.len(), 2);
                assert_eq!(members[0].kind(), GeomKind::Collection);
                assert_eq!(members[0].num_parts(), 2);
                assert_eq!(members[1].type_name(), "MULTIPOLYGON");
            }
            other => panic!("Expected a collection: {other:?}"),
        }
    }

    #[test]
    fn test_collection_dimensions_are_per_member() {
        let text = "GEOMETRYCOLLECTION (POINT (1 1 1), POINT (2 2))";
        match parse(text) {
            Ok(geom) => assert_eq!(geom.num_coords(), 2),
            Err(err) => panic!("Failed to parse collection: {err}"),
        }
    }

    #[test]
    fn test_empty_collection() {
        for text in ["GEOMETRYCOLLECTION ()", "GEOMETRYCOLLECTION (   )"] {
            match parse(text) {
                Err(GeometryError::EmptyCollection { position: 19 }) => (),
                other => panic!("Expected empty collection for '{text}': {other:?}"),
            }
        }
    }

    #[test]
    fn test_member_error_aborts_collection() {
        match parse("GEOMETRYCOLLECTION (POINT (1 1), POINT (x 2))") {
            Err(GeometryError::MalformedCoordinate { token, position }) => {
                assert_eq!(token, "x");
                assert_eq!(position, 40);
            }
            other => panic!("Expected malformed coordinate: {other:?}"),
        }

        match parse("GEOMETRYCOLLECTION (POINT (1 1), CIRCLE (2 2))") {
            Err(GeometryError::UnknownGeometryType { keyword, .. }) => {
                assert_eq!(keyword, "CIRCLE")
            }
            other => panic!("Expected unknown type: {other:?}"),
        }

        match parse("GEOMETRYCOLLECTION (POINT (1 1), POLYGON ((0 0, 1 1))") {
            Err(GeometryError::UnbalancedParentheses { .. }) => (),
            other => panic!("Expected unbalanced parentheses: {other:?}"),
        }

        if let Ok(_) = parse("GEOMETRYCOLLECTION (POINT (1 1), )") {
            panic!("Parsed collection with an empty member");
        }

        if let Ok(_) = parse("GEOMETRYCOLLECTION (POINT (1 1)) POINT (2 2)") {
            panic!("Parsed collection with trailing characters");
        }
    }

    #[test]
    fn test_nesting_limit() {
        let mut text = String::from("POINT (0 0)");
        for _ in 0..5 {
            text = format!("GEOMETRYCOLLECTION ({text})");
        }

        let tight = ParseOptions::default().with_max_depth(3);
        match parse_with(&text, &tight) {
            Err(GeometryError::NestingTooDeep { limit: 3 }) => (),
            other => panic!("Expected nesting error: {other:?}"),
        }

        let loose = ParseOptions::default().with_max_depth(4);
        if let Err(err) = parse_with(&text, &loose) {
            panic!("Failed to parse nested collections: {err}");
        }
    }
}
