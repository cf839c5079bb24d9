//! Ternary topological predicates.
//!
//! Every predicate takes the other operand as an `Option` and returns [`Ternary::Unknown`] when
//! it is missing. Comparisons go through the rings of [`Shape`] and the areas of [`AreaSet`].

use super::{Geometry, GeometryTrait, MultiPolygonGeometry, PointGeometry};
use crate::{Shape, Ternary};

impl Geometry {
	/// `True` if both geometries describe the same figure.
	///
	/// Only geometries of the same variant can be equal. Points compare within [`crate::EPSILON`],
	/// other geometries ring by ring, and polygons fall back to comparing the covered area.
	/// Multi geometries and collections compare child by child.
	pub fn equals(&self, other: Option<&Geometry>) -> Ternary {
		let Some(other) = other else {
			return Ternary::Unknown;
		};
		if std::ptr::eq(self, other) {
			return Ternary::True;
		}
		if self.dimension() != other.dimension() {
			return Ternary::False;
		}

		use Geometry::*;
		let result = match (self, other) {
			(Point(a), Point(b)) => a.coincides(b),
			(LineString(a), LineString(b)) => a.coincides(b),
			(Polygon(a), Polygon(b)) => a.coincides(b),
			(MultiPoint(a), MultiPoint(b)) => a.coincides(b),
			(MultiLineString(a), MultiLineString(b)) => a.coincides(b),
			(MultiPolygon(a), MultiPolygon(b)) => a.coincides(b),
			(GeometryCollection(a), GeometryCollection(b)) => {
				a.0.len() == b.0.len() && a.0.iter().zip(&b.0).all(|(a, b)| a.equals(Some(b)).is_true())
			}
			_ => false,
		};
		Ternary::from(result)
	}

	/// `True` if the geometries have no point in common.
	///
	/// # Panics
	///
	/// Not implemented for a geometry collection as receiver.
	pub fn disjoint(&self, other: Option<&Geometry>) -> Ternary {
		let Some(other) = other else {
			return Ternary::Unknown;
		};
		match self {
			Geometry::Point(point) => point_disjoint(point, other),
			Geometry::MultiPolygon(multi) => multi_polygon_disjoint(multi, other),
			Geometry::GeometryCollection(_) => unimplemented!("disjoint is not implemented for GEOMETRYCOLLECTION"),
			_ => shape_disjoint(&self.as_shape(), self, other),
		}
	}

	/// `True` if `other` lies completely inside this geometry.
	///
	/// A point never contains anything, not even an identical point.
	///
	/// # Panics
	///
	/// Not implemented for a geometry collection as receiver.
	pub fn contains(&self, other: Option<&Geometry>) -> Ternary {
		let Some(other) = other else {
			return Ternary::Unknown;
		};
		match self {
			Geometry::Point(_) => Ternary::False,
			Geometry::MultiPolygon(multi) => multi_polygon_contains(multi, other),
			Geometry::GeometryCollection(_) => unimplemented!("contains is not implemented for GEOMETRYCOLLECTION"),
			_ => shape_contains(&self.as_shape(), self, other),
		}
	}

	/// `True` if this geometry lies completely inside `other`.
	pub fn within(&self, other: Option<&Geometry>) -> Ternary {
		match other {
			Some(other) => other.contains(Some(self)),
			None => Ternary::Unknown,
		}
	}

	/// `True` if the geometries share at least one point.
	///
	/// Evaluated as `disjoint` with swapped operands, so a collection works as receiver.
	pub fn intersects(&self, other: Option<&Geometry>) -> Ternary {
		match other {
			Some(other) => !other.disjoint(Some(self)),
			None => Ternary::Unknown,
		}
	}
}

fn point_disjoint(point: &PointGeometry, other: &Geometry) -> Ternary {
	match other {
		Geometry::Point(other_point) => Ternary::from(!point.coincides(other_point)),
		_ => Ternary::from(!other.as_shape().contains(point.x(), point.y())),
	}
}

fn shape_disjoint(shape: &Shape, geometry: &Geometry, other: &Geometry) -> Ternary {
	match other {
		Geometry::Point(point) => Ternary::from(!shape.contains(point.x(), point.y())),
		Geometry::MultiPoint(points) => Ternary::from(!points.0.iter().any(|p| shape.contains(p.x(), p.y()))),
		_ => Ternary::from(geometry.to_area().intersect(&other.to_area()).is_empty()),
	}
}

fn shape_contains(shape: &Shape, geometry: &Geometry, other: &Geometry) -> Ternary {
	match other {
		Geometry::Point(point) => Ternary::from(shape.contains(point.x(), point.y())),
		Geometry::MultiPoint(points) => Ternary::from(points.0.iter().all(|p| shape.contains(p.x(), p.y()))),
		_ => {
			let other_area = other.to_area();
			Ternary::from(geometry.to_area().intersect(&other_area).equals_area(&other_area))
		}
	}
}

// The first member that is not disjoint decides.
fn multi_polygon_disjoint(multi: &MultiPolygonGeometry, other: &Geometry) -> Ternary {
	for polygon in &multi.0 {
		let member = Geometry::Polygon(polygon.clone());
		match shape_disjoint(&member.as_shape(), &member, other) {
			Ternary::True => {}
			result => return result,
		}
	}
	Ternary::True
}

// The first member that contains `other` decides.
fn multi_polygon_contains(multi: &MultiPolygonGeometry, other: &Geometry) -> Ternary {
	for polygon in &multi.0 {
		let member = Geometry::Polygon(polygon.clone());
		match shape_contains(&member.as_shape(), &member, other) {
			Ternary::False => {}
			result => return result,
		}
	}
	Ternary::False
}
