use super::*;
use crate::{AreaSet, GeometryError, Shape, wkt};
use anyhow::Result;
use std::{fmt::Debug, str::FromStr};

/// Any of the seven geometry variants.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point(value: [f64; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string(value: Vec<[f64; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point(value: Vec<[f64; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon(value: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	/// Parses well-known text.
	pub fn from_wkt(text: &str) -> Result<Geometry, GeometryError> {
		wkt::parse(text)
	}

	/// The covered area. Multi-geometries and collections unite the areas of their members.
	pub fn to_area(&self) -> AreaSet {
		match self {
			Geometry::MultiPolygon(g) => g.to_area(),
			Geometry::GeometryCollection(g) => g.to_area(),
			_ => self.as_shape().to_area(),
		}
	}

	/// Number of children of container variants, `None` for single geometries.
	pub fn child_count(&self) -> Option<usize> {
		match self {
			Geometry::MultiPoint(g) => Some(g.child_count()),
			Geometry::MultiLineString(g) => Some(g.child_count()),
			Geometry::MultiPolygon(g) => Some(g.child_count()),
			Geometry::GeometryCollection(g) => Some(g.child_count()),
			_ => None,
		}
	}

	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			_ => self,
		}
	}

	fn inner(&self) -> &dyn Debug {
		match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		}
	}
}

impl GeometryTrait for Geometry {
	fn dimension(&self) -> u8 {
		match self {
			Geometry::Point(g) => g.dimension(),
			Geometry::LineString(g) => g.dimension(),
			Geometry::Polygon(g) => g.dimension(),
			Geometry::MultiPoint(g) => g.dimension(),
			Geometry::MultiLineString(g) => g.dimension(),
			Geometry::MultiPolygon(g) => g.dimension(),
			Geometry::GeometryCollection(g) => g.dimension(),
		}
	}

	fn type_tag(&self) -> &'static str {
		match self {
			Geometry::Point(g) => g.type_tag(),
			Geometry::LineString(g) => g.type_tag(),
			Geometry::Polygon(g) => g.type_tag(),
			Geometry::MultiPoint(g) => g.type_tag(),
			Geometry::MultiLineString(g) => g.type_tag(),
			Geometry::MultiPolygon(g) => g.type_tag(),
			Geometry::GeometryCollection(g) => g.type_tag(),
		}
	}

	fn as_shape(&self) -> Shape {
		match self {
			Geometry::Point(g) => g.as_shape(),
			Geometry::LineString(g) => g.as_shape(),
			Geometry::Polygon(g) => g.as_shape(),
			Geometry::MultiPoint(g) => g.as_shape(),
			Geometry::MultiLineString(g) => g.as_shape(),
			Geometry::MultiPolygon(g) => g.as_shape(),
			Geometry::GeometryCollection(g) => g.as_shape(),
		}
	}

	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(g) => g.verify(),
		}
	}

	fn coincides(&self, other: &Self) -> bool {
		self.equals(Some(other)).is_true()
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
			Geometry::GeometryCollection(g) => g.compute_bounds(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let type_name = match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		};
		f.debug_tuple(type_name).field(self.inner()).finish()
	}
}

/// Formats as well-known text. Panics for geometry collections.
impl std::fmt::Display for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.as_text())
	}
}

impl FromStr for Geometry {
	type Err = GeometryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		wkt::parse(s)
	}
}

impl From<PointGeometry> for Geometry {
	fn from(value: PointGeometry) -> Self {
		Geometry::Point(value)
	}
}

impl From<LineStringGeometry> for Geometry {
	fn from(value: LineStringGeometry) -> Self {
		Geometry::LineString(value)
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(value: PolygonGeometry) -> Self {
		Geometry::Polygon(value)
	}
}

impl From<MultiPointGeometry> for Geometry {
	fn from(value: MultiPointGeometry) -> Self {
		Geometry::MultiPoint(value)
	}
}

impl From<MultiLineStringGeometry> for Geometry {
	fn from(value: MultiLineStringGeometry) -> Self {
		Geometry::MultiLineString(value)
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(value: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(value)
	}
}

impl From<GeometryCollection> for Geometry {
	fn from(value: GeometryCollection) -> Self {
		Geometry::GeometryCollection(value)
	}
}
