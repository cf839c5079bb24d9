use super::{CompositeGeometryTrait, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use crate::{Coordinates, Ring, Shape};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An open sequence of connected coordinates.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// The coordinates as an open ring.
	pub fn to_ring(&self) -> Ring {
		Ring::open(self.0.clone())
	}
}

impl GeometryTrait for LineStringGeometry {
	fn dimension(&self) -> u8 {
		1
	}

	fn type_tag(&self) -> &'static str {
		"LINESTRING"
	}

	fn as_shape(&self) -> Shape {
		Shape::new(vec![self.to_ring()])
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "LineString must have at least one point");
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		self.to_ring().coincides(&other.to_ring())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
