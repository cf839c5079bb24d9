use super::{Coordinates, Ring, Shape};
use geo::{Area, BooleanOps, LineString, MultiPolygon, Polygon, unary_union};

/// Relative tolerance used by [`AreaSet::equals_area`].
/// Boolean operations snap coordinates to a grid scaled to the extent of the operands.
const AREA_TOLERANCE: f64 = 1e-6;

/// The area covered by a [`Shape`], used for intersection, union and area equality.
///
/// Rings are combined with the even-odd rule, matching [`Shape::contains`]. Open rings are closed
/// implicitly; rings without any area (fewer than three points, collinear points) add nothing.
#[derive(Clone, Debug)]
pub struct AreaSet(MultiPolygon<f64>);

impl Default for AreaSet {
	fn default() -> Self {
		Self::new()
	}
}

impl AreaSet {
	#[must_use]
	pub fn new() -> Self {
		Self(MultiPolygon::new(Vec::new()))
	}

	/// Union of all given area sets.
	pub fn union_all<'a>(areas: impl IntoIterator<Item = &'a AreaSet>) -> AreaSet {
		let polygons: Vec<Polygon<f64>> = areas.into_iter().flat_map(|area| area.0.0.iter().cloned()).collect();
		if polygons.is_empty() {
			return AreaSet::new();
		}
		AreaSet(unary_union(&polygons))
	}

	#[must_use]
	pub fn intersect(&self, other: &AreaSet) -> AreaSet {
		if self.is_empty() || other.is_empty() {
			return AreaSet::new();
		}
		AreaSet(self.0.intersection(&other.0))
	}

	pub fn union_add(&mut self, other: &AreaSet) {
		if other.0.0.is_empty() {
			return;
		}
		self.0 = if self.0.0.is_empty() {
			other.0.clone()
		} else {
			self.0.union(&other.0)
		};
	}

	pub fn area(&self) -> f64 {
		self.0.unsigned_area()
	}

	pub fn is_empty(&self) -> bool {
		self.0.0.is_empty() || self.area() == 0.0
	}

	/// Returns `true` if both sets cover the same area, up to a small relative tolerance.
	pub fn equals_area(&self, other: &AreaSet) -> bool {
		let limit = AREA_TOLERANCE * self.area().max(other.area());
		self.0.xor(&other.0).unsigned_area() <= limit
	}

	pub fn to_shape(&self) -> Shape {
		let mut shape = Shape::default();
		for polygon in &self.0 {
			shape.push(line_to_ring(polygon.exterior()));
			for interior in polygon.interiors() {
				shape.push(line_to_ring(interior));
			}
		}
		shape
	}

	pub fn as_multi_polygon(&self) -> &MultiPolygon<f64> {
		&self.0
	}
}

fn line_to_ring(line: &LineString<f64>) -> Ring {
	Ring::closed(line.coords().map(Coordinates::from).collect())
}

fn ring_to_polygon(ring: &Ring) -> Option<MultiPolygon<f64>> {
	if ring.len() < 3 {
		return None;
	}
	let line = LineString::from(ring.coords().iter().map(|c| geo::Coord::from(*c)).collect::<Vec<_>>());
	let polygon = Polygon::new(line, vec![]);
	if polygon.unsigned_area() == 0.0 {
		return None;
	}
	Some(MultiPolygon::new(vec![polygon]))
}

impl From<&Shape> for AreaSet {
	fn from(shape: &Shape) -> Self {
		let mut result: Option<MultiPolygon<f64>> = None;
		for polygon in shape.rings().iter().filter_map(ring_to_polygon) {
			result = Some(match result {
				Some(acc) => acc.xor(&polygon),
				None => polygon,
			});
		}
		result.map_or_else(AreaSet::new, AreaSet)
	}
}

impl From<MultiPolygon<f64>> for AreaSet {
	fn from(value: MultiPolygon<f64>) -> Self {
		Self(value)
	}
}

impl From<AreaSet> for Shape {
	fn from(value: AreaSet) -> Self {
		value.to_shape()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	fn ring(points: &[[f64; 2]]) -> Ring {
		Ring::auto_closed(points.iter().map(Coordinates::from).collect())
	}

	fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
		Shape::new(vec![ring(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1]])])
	}

	#[test]
	fn area_of_shape_with_hole() {
		let mut shape = rect(0.0, 0.0, 10.0, 10.0);
		shape.append(rect(4.0, 4.0, 6.0, 6.0));
		assert_abs_diff_eq!(shape.to_area().area(), 96.0, epsilon = 1e-9);
	}

	#[test]
	fn degenerate_rings_have_no_area() {
		let line = Shape::new(vec![Ring::open(vec![Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)])]);
		assert!(line.to_area().is_empty());

		let collinear = Shape::new(vec![ring(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])]);
		assert!(collinear.to_area().is_empty());

		assert!(Shape::default().to_area().is_empty());
		assert!(AreaSet::new().is_empty());
		assert!(AreaSet::default().is_empty());
		assert!(AreaSet::default().as_multi_polygon().0.is_empty());
	}

	#[test]
	fn intersect() {
		let a = rect(0.0, 0.0, 4.0, 4.0).to_area();
		let b = rect(2.0, 2.0, 6.0, 6.0).to_area();
		assert_abs_diff_eq!(a.intersect(&b).area(), 4.0, epsilon = 1e-9);

		let c = rect(5.0, 5.0, 6.0, 6.0).to_area();
		assert!(a.intersect(&c).is_empty());
		assert!(a.intersect(&AreaSet::new()).is_empty());
	}

	#[test]
	fn union_add() {
		let mut area = AreaSet::new();
		area.union_add(&rect(0.0, 0.0, 2.0, 2.0).to_area());
		area.union_add(&rect(1.0, 0.0, 3.0, 2.0).to_area());
		area.union_add(&AreaSet::new());
		assert_abs_diff_eq!(area.area(), 6.0, epsilon = 1e-9);

		let all = AreaSet::union_all([&rect(0.0, 0.0, 2.0, 2.0).to_area(), &rect(1.0, 0.0, 3.0, 2.0).to_area()]);
		assert!(all.equals_area(&area));
		assert!(AreaSet::union_all(Vec::<&AreaSet>::new()).is_empty());
	}

	#[test]
	fn equals_area_ignores_ring_start() {
		let a = rect(0.0, 0.0, 4.0, 4.0).to_area();
		let b = Shape::new(vec![ring(&[[4.0, 4.0], [0.0, 4.0], [0.0, 0.0], [4.0, 0.0]])]).to_area();
		assert!(a.equals_area(&b));
		assert!(!a.equals_area(&rect(0.0, 0.0, 4.0, 4.1).to_area()));
		assert!(AreaSet::new().equals_area(&AreaSet::new()));
	}

	#[test]
	fn to_shape() {
		let shape = AreaSet::from(&rect(0.0, 0.0, 4.0, 4.0)).to_shape();
		assert_eq!(shape.len(), 1);
		assert!(shape.rings()[0].is_closed());
		assert_eq!(shape.bounding_box(), Some([0.0, 0.0, 4.0, 4.0]));
		assert!(shape.contains(2.0, 2.0));

		let back: Shape = AreaSet::from(shape.to_area().as_multi_polygon().clone()).into();
		assert!(back.to_area().equals_area(&shape.to_area()));
	}
}
