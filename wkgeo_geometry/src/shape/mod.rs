// The ring model every geometry variant renders to: coordinates, rings, multi-ring shapes and the
// area sets used for boolean comparisons. Geometry values hand out owned copies of these types, so
// a caller can never alias the rings held inside a geometry.

mod area;
mod coordinates;
mod ring;
#[allow(clippy::module_inception)]
mod shape;

pub use area::*;
pub use coordinates::*;
pub use ring::*;
pub use shape::*;
