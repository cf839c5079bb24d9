use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use crate::Shape;
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn dimension(&self) -> u8 {
		1
	}

	fn type_tag(&self) -> &'static str {
		"MULTILINESTRING"
	}

	fn as_shape(&self) -> Shape {
		Shape::new(self.0.iter().map(LineStringGeometry::to_ring).collect())
	}

	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a.coincides(b))
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
