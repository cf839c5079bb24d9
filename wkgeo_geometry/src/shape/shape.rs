use super::{AreaSet, Ring};
use std::fmt::Debug;

/// An ordered list of rings. Geometries render to a shape for bounding boxes, point containment
/// and, through [`AreaSet`], area comparisons.
#[derive(Clone, PartialEq, Default)]
pub struct Shape(Vec<Ring>);

impl Shape {
	#[must_use]
	pub fn new(rings: Vec<Ring>) -> Self {
		Self(rings)
	}

	pub fn rings(&self) -> &[Ring] {
		&self.0
	}

	pub fn into_rings(self) -> Vec<Ring> {
		self.0
	}

	pub fn push(&mut self, ring: Ring) {
		self.0.push(ring);
	}

	/// Appends all rings of `other`.
	pub fn append(&mut self, other: Shape) {
		self.0.extend(other.0);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// `[min_x, min_y, max_x, max_y]` over all rings. Empty rings are ignored.
	pub fn bounding_box(&self) -> Option<[f64; 4]> {
		self.0.iter().filter_map(Ring::bounds).reduce(|a, b| {
			[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
		})
	}

	/// Even-odd containment over all rings, so holes cut out of their outer ring.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		self.0.iter().filter(|ring| ring.contains_point(x, y)).count() % 2 == 1
	}

	/// Ring by ring comparison within [`super::EPSILON`].
	pub fn coincides(&self, other: &Shape) -> bool {
		self.0.len() == other.0.len() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a.coincides(b))
	}

	pub fn to_area(&self) -> AreaSet {
		AreaSet::from(self)
	}
}

impl From<Vec<Ring>> for Shape {
	fn from(rings: Vec<Ring>) -> Self {
		Self(rings)
	}
}

impl Debug for Shape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
