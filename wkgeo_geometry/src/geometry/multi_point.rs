use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use crate::Shape;
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	/// Reports 1, not 0, for compatibility with existing consumers of this library.
	fn dimension(&self) -> u8 {
		1
	}

	fn type_tag(&self) -> &'static str {
		"MULTIPOINT"
	}

	fn as_shape(&self) -> Shape {
		let mut shape = Shape::default();
		for point in &self.0 {
			shape.append(point.as_shape());
		}
		shape
	}

	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a.coincides(b))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.0.iter().filter_map(PointGeometry::compute_bounds).reduce(|a, b| {
			[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
		})
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
