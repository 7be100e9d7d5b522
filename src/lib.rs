pub mod core;
mod geometry;
mod linestring;
pub mod parser;
mod points;
mod polygons;

pub use self::core::*;
pub use self::geometry::*;
pub use self::linestring::*;
pub use self::parser::{ParseOptions, parse, parse_tuple, parse_with};
pub use self::points::*;
pub use self::polygons::*;
