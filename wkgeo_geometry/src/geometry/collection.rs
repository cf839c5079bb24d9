use super::{CompositeGeometryTrait, Geometry, GeometryTrait};
use crate::{AreaSet, Shape};
use anyhow::Result;
use std::fmt::Debug;

/// A heterogeneous, ordered list of geometries.
///
/// Not every operation is available for collections: WKT formatting, WKB reading and the
/// `disjoint`/`contains` predicates panic when they reach a collection.
#[derive(Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
	/// Union of the areas of all children.
	pub fn to_area(&self) -> AreaSet {
		let areas: Vec<AreaSet> = self.0.iter().map(Geometry::to_area).collect();
		AreaSet::union_all(&areas)
	}
}

impl GeometryTrait for GeometryCollection {
	/// Highest dimension of all children, 0 for an empty collection.
	fn dimension(&self) -> u8 {
		self.0.iter().map(Geometry::dimension).max().unwrap_or(0)
	}

	fn type_tag(&self) -> &'static str {
		"GEOMETRYCOLLECTION"
	}

	fn as_shape(&self) -> Shape {
		let mut shape = Shape::default();
		for child in &self.0 {
			shape.append(child.as_shape());
		}
		shape
	}

	fn verify(&self) -> Result<()> {
		for child in &self.0 {
			child.verify()?;
		}
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a.coincides(b))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.0.iter().filter_map(Geometry::compute_bounds).reduce(|a, b| {
			[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
		})
	}
}

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Geometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Geometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(value: Vec<Geometry>) -> Self {
		Self(value)
	}
}
