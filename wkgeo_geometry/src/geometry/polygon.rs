use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, MultiPolygonGeometry, SingleGeometryTrait};
use crate::{Ring, Shape};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// One or more closed rings. The first ring is the outer boundary, the following rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<Ring>);

impl GeometryTrait for PolygonGeometry {
	fn dimension(&self) -> u8 {
		2
	}

	fn type_tag(&self) -> &'static str {
		"POLYGON"
	}

	fn as_shape(&self) -> Shape {
		Shape::new(self.0.iter().map(|ring| Ring::closed(ring.coords().to_vec())).collect())
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ensure!(!ring.is_empty(), "Polygon rings must have at least one point");
		}
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		let a = self.as_shape();
		let b = other.as_shape();
		a.coincides(&b) || a.to_area().equals_area(&b.to_area())
	}
}

impl CompositeGeometryTrait<Ring> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Ring> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Ring> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Ring> {
		self.0
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, LineStringGeometry, |line: LineStringGeometry| {
	Ring::auto_closed(line.0)
});
