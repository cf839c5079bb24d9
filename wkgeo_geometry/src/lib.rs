//! Vector geometries with a well-known text (WKT) parser and formatter, a well-known binary (WKB)
//! reader and writer, and ternary topological predicates.
//!
//! ```
//! use wkgeo_geometry::{Geometry, GeometryTrait, Ternary};
//!
//! let a = Geometry::from_wkt("POLYGON((0 0,4 0,4 4,0 4))").unwrap();
//! let b = Geometry::from_wkt("point(1 1)").unwrap();
//! assert_eq!(a.as_text(), "POLYGON((0 0,4 0,4 4,0 4,0 0))");
//! assert_eq!(a.contains(Some(&b)), Ternary::True);
//! ```

mod error;
mod geometry;
mod shape;
mod ternary;
pub mod tfw;
pub mod wkb;
pub mod wkt;

pub use error::*;
pub use geometry::*;
pub use shape::*;
pub use ternary::*;
