// The seven geometry variants, the `Geometry` sum type over them and the ternary predicates.
// Every variant owns its coordinates; `as_shape` hands out an independent copy of the rings.

mod collection;
#[allow(clippy::module_inception)]
mod geometry;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod relate;
mod traits;

pub use collection::*;
pub use geometry::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
