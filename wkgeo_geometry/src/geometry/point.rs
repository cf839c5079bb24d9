use super::{GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use crate::{Coordinates, EPSILON, Ring, Shape};
use std::fmt::Debug;

/// A single coordinate.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn dimension(&self) -> u8 {
		0
	}

	fn type_tag(&self) -> &'static str {
		"POINT"
	}

	/// A closed square of half-width [`EPSILON`] around the point, so that a point still covers
	/// a tiny area in area comparisons.
	fn as_shape(&self) -> Shape {
		let (x, y) = (self.x(), self.y());
		Shape::new(vec![Ring::closed(vec![
			Coordinates::new(x - EPSILON, y - EPSILON),
			Coordinates::new(x + EPSILON, y - EPSILON),
			Coordinates::new(x + EPSILON, y + EPSILON),
			Coordinates::new(x - EPSILON, y + EPSILON),
		])])
	}

	fn verify(&self) -> anyhow::Result<()> {
		Ok(())
	}

	fn coincides(&self, other: &Self) -> bool {
		self.0.coincides(&other.0)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.x(), self.y(), self.x(), self.y()])
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Coordinates> for PointGeometry {
	fn from(value: Coordinates) -> Self {
		Self(value)
	}
}

impl From<[f64; 2]> for PointGeometry {
	fn from(value: [f64; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<(f64, f64)> for PointGeometry {
	fn from(value: (f64, f64)) -> Self {
		Self(Coordinates::from(value))
	}
}

impl<'a, T> From<&'a [T; 2]> for PointGeometry
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
		assert_eq!(point.dimension(), 0);
		assert_eq!(point.type_tag(), "POINT");
		assert!(point.verify().is_ok());
	}

	#[test]
	fn conversions() {
		assert_eq!(PointGeometry::from(&[1, 2]), PointGeometry::from([1.0, 2.0]));
		assert_eq!(PointGeometry::from((3.0, 4.0)).0, Coordinates::new(3.0, 4.0));
		assert_eq!(format!("{:?}", PointGeometry::from([1.0, 2.0])), "[1.0, 2.0]");
	}

	#[test]
	fn coincides_within_epsilon() {
		let a = PointGeometry::from([4.0, 5.0]);
		assert!(a.coincides(&PointGeometry::from([4.0000001, 5.0])));
		assert!(!a.coincides(&PointGeometry::from([4.1, 5.0])));
	}

	#[test]
	fn shape_surrounds_point() {
		let point = PointGeometry::from([5.0, 6.0]);
		let shape = point.as_shape();
		assert!(shape.contains(5.0, 6.0));
		assert!(!shape.contains(5.0001, 6.0));
		let area = shape.to_area().area();
		assert_abs_diff_eq!(area, 4.0 * EPSILON * EPSILON, epsilon = 1e-15);
	}

	#[test]
	fn bounds_and_center() {
		let point = PointGeometry::from([5.0, 6.0]);
		assert_eq!(point.compute_bounds(), Some([5.0, 6.0, 5.0, 6.0]));
		assert_eq!(point.center_point(), Some(point));
	}

	#[test]
	fn into_multi() {
		let multi = PointGeometry::from([1.0, 2.0]).into_multi();
		assert_eq!(multi.0, vec![PointGeometry::from([1.0, 2.0])]);
	}
}
