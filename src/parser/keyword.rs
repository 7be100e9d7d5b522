use super::Span;
use crate::core::{GeomResult, GeometryError};
use crate::geometry::GeomKind;
use regex::Regex;
use std::sync::OnceLock;

const GEOM_TYPE: &str = r"^\s*(\w*)\s*";

static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();

/// Kind of the parts a simple or multi geometry is made of
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PartKind {
    Point,
    LineString,
    Polygon,
}

/// Geometry type named by a leading keyword
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GeomType {
    Single(PartKind),
    Multi(PartKind),
    Collection,
}

impl GeomType {
    pub(crate) fn kind(self) -> GeomKind {
        match self {
            GeomType::Single(part) | GeomType::Multi(part) => match part {
                PartKind::Point => GeomKind::Point,
                PartKind::LineString => GeomKind::LineString,
                PartKind::Polygon => GeomKind::Polygon,
            },
            GeomType::Collection => GeomKind::Collection,
        }
    }

    pub(crate) fn is_multi(self) -> bool {
        matches!(self, GeomType::Multi(_))
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        let geom_type = match keyword {
            "POINT" => GeomType::Single(PartKind::Point),
            "LINESTRING" => GeomType::Single(PartKind::LineString),
            "POLYGON" => GeomType::Single(PartKind::Polygon),
            "MULTIPOINT" => GeomType::Multi(PartKind::Point),
            "MULTILINESTRING" => GeomType::Multi(PartKind::LineString),
            "MULTIPOLYGON" => GeomType::Multi(PartKind::Polygon),
            "GEOMETRYCOLLECTION" => GeomType::Collection,
            _ => return None,
        };
        Some(geom_type)
    }
}

// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).unwrap())
}

/// Identifies the type of geometry at the start of a string
///
/// Returns the type together with the payload that follows the keyword and its
/// separating whitespace.
pub(crate) fn identify_type<'a>(raw: Span<'a>) -> GeomResult<(GeomType, Span<'a>)> {
    let text = raw.as_str();
    let (word, end) = match geom_type_re().captures(text) {
        Some(cap) => {
            let word = cap.get(1).map_or(raw.slice(0, 0), |m| raw.slice(m.start(), m.end()));
            (word, cap.get_match().end())
        }
        None => (raw.slice(0, 0), 0),
    };

    match GeomType::from_keyword(word.as_str()) {
        Some(geom_type) => Ok((geom_type, raw.slice(end, text.len()))),
        None => {
            // Report the whole leading token, e.g. "!" or "PO" in "PO INT"
            let trimmed = raw.trim();
            let token_end = trimmed
                .as_str()
                .find(|c: char| c.is_whitespace() || c == '(')
                .unwrap_or(trimmed.as_str().len());
            let token = if word.is_empty() {
                trimmed.slice(0, token_end)
            } else {
                word
            };
            Err(GeometryError::UnknownGeometryType {
                keyword: token.as_str().to_string(),
                position: token.start(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_type_valid() {
        if let Err(_) = identify_type(Span::new("POINT (0 0)")) {
            panic!("Failed to parse valid geom type");
        }

        match identify_type(Span::new("POINT (0 0)")) {
            Ok((GeomType::Single(PartKind::Point), rest)) => {
                assert_eq!(rest.as_str(), "(0 0)");
                assert_eq!(rest.start(), 6);
            }
            other => panic!("Unexpected type: {other:?}"),
        }

        match identify_type(Span::new("MULTIPOLYGON(((0 0, 0 1, 1 1, 0 0)))")) {
            Ok((gt, rest)) => {
                assert_eq!(gt, GeomType::Multi(PartKind::Polygon));
                assert_eq!(gt.kind(), GeomKind::Polygon);
                assert!(gt.is_multi());
                assert_eq!(rest.start(), 12);
            }
            Err(err) => panic!("Failed to parse valid geom type: {err}"),
        }

        match identify_type(Span::new("  GEOMETRYCOLLECTION (POINT (1 1))")) {
            Ok((GeomType::Collection, rest)) => assert_eq!(rest.start(), 21),
            other => panic!("Unexpected type: {other:?}"),
        }
    }

    #[test]
    fn test_all_keywords() {
        let keywords = [
            ("POINT", GeomKind::Point, false),
            ("LINESTRING", GeomKind::LineString, false),
            ("POLYGON", GeomKind::Polygon, false),
            ("MULTIPOINT", GeomKind::Point, true),
            ("MULTILINESTRING", GeomKind::LineString, true),
            ("MULTIPOLYGON", GeomKind::Polygon, true),
            ("GEOMETRYCOLLECTION", GeomKind::Collection, false),
        ];
        for (keyword, kind, multi) in keywords {
            let text = format!("{keyword} ()");
            let (gt, _) = identify_type(Span::new(&text)).unwrap();
            assert_eq!(gt.kind(), kind);
            assert_eq!(gt.is_multi(), multi);
        }
    }

    #[test]
    fn test_identify_type_invalid() {
        match identify_type(Span::new("PoinT(0 1)")) {
            Err(GeometryError::UnknownGeometryType { keyword, position }) => {
                assert_eq!(keyword, "PoinT");
                assert_eq!(position, 0);
            }
            other => panic!("Expected parse error (capitalization): {other:?}"),
        }

        match identify_type(Span::new("PO INT(0 1)")) {
            Err(GeometryError::UnknownGeometryType { keyword, .. }) => assert_eq!(keyword, "PO"),
            other => panic!("Expected parse error (spacing): {other:?}"),
        }

        match identify_type(Span::new("! POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))")) {
            Err(GeometryError::UnknownGeometryType { keyword, .. }) => assert_eq!(keyword, "!"),
            other => panic!("Expected parse error (invalid prefix): {other:?}"),
        }

        if let Ok(_) = identify_type(Span::new("NOTASHAPE ((0 0, 0 1, 1 1, 1 0, 0 0))")) {
            panic!("Expected parse error (invalid type)");
        }

        match identify_type(Span::new("   ")) {
            Err(GeometryError::UnknownGeometryType { keyword, position }) => {
                assert_eq!(keyword, "");
                assert_eq!(position, 3);
            }
            other => panic!("Expected parse error (empty input): {other:?}"),
        }
    }
}
