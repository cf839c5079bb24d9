use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use crate::{AreaSet, Shape};
use anyhow::Result;
use std::fmt::Debug;

/// A list of polygons, each with an outer ring and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// Union of the member areas.
	pub fn to_area(&self) -> AreaSet {
		let areas: Vec<AreaSet> = self.0.iter().map(|polygon| polygon.as_shape().to_area()).collect();
		AreaSet::union_all(&areas)
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn dimension(&self) -> u8 {
		2
	}

	fn type_tag(&self) -> &'static str {
		"MULTIPOLYGON"
	}

	fn as_shape(&self) -> Shape {
		let mut shape = Shape::default();
		for polygon in &self.0 {
			shape.append(polygon.as_shape());
		}
		shape
	}

	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a.coincides(b))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
