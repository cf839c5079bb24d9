//! Canonical well-known text output: uppercase tags, no whitespace around punctuation, integral
//! numbers without a decimal point.

use crate::{
	Coordinates, Geometry, GeometryCollection, GeometryError, GeometryTrait, LineStringGeometry,
	MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, Ring,
};
use std::fmt::Write;

type Result<T> = std::result::Result<T, GeometryError>;

/// Formats a number the way it appears in well-known text.
///
/// Integral values are written without a decimal point, everything else uses the shortest
/// representation that reads back to the same value.
pub fn format_number(value: f64) -> String {
	if value == 0.0 {
		String::from("0")
	} else if value.floor() == value {
		format!("{value:.0}")
	} else {
		format!("{value}")
	}
}

/// Formats `geometry` as well-known text that parses back to the same geometry.
///
/// Unlike [`GeometryTrait::as_text`] this rejects empty line strings, rings, polygons and multi
/// geometries as well as non-finite coordinates, none of which can be read back.
///
/// # Panics
///
/// Geometry collections are not supported.
pub fn format_geometry(geometry: &Geometry) -> Result<String> {
	check_geometry(geometry)?;
	Ok(geometry.as_text())
}

fn check_geometry(geometry: &Geometry) -> Result<()> {
	match geometry {
		Geometry::Point(point) => check_coordinates(&point.0),
		Geometry::LineString(line) => check_line_string(line),
		Geometry::Polygon(polygon) => check_polygon(polygon),
		Geometry::MultiPoint(multi) => {
			check_members(multi.0.len(), "MultiPoint")?;
			multi.0.iter().try_for_each(|point| check_coordinates(&point.0))
		}
		Geometry::MultiLineString(multi) => {
			check_members(multi.0.len(), "MultiLineString")?;
			multi.0.iter().try_for_each(check_line_string)
		}
		Geometry::MultiPolygon(multi) => {
			check_members(multi.0.len(), "MultiPolygon")?;
			multi.0.iter().try_for_each(check_polygon)
		}
		Geometry::GeometryCollection(_) => Ok(()),
	}
}

fn check_members(count: usize, name: &str) -> Result<()> {
	if count == 0 {
		return Err(GeometryError::invalid_format(format!("{name} without members")));
	}
	Ok(())
}

fn check_coordinates(c: &Coordinates) -> Result<()> {
	if !(c.x().is_finite() && c.y().is_finite()) {
		return Err(GeometryError::invalid_format(format!("non-finite coordinate {c:?}")));
	}
	Ok(())
}

fn check_coordinate_list(coords: &[Coordinates], name: &str) -> Result<()> {
	if coords.is_empty() {
		return Err(GeometryError::invalid_format(format!("{name} without points")));
	}
	coords.iter().try_for_each(check_coordinates)
}

fn check_line_string(line: &LineStringGeometry) -> Result<()> {
	check_coordinate_list(&line.0, "LineString")
}

fn check_polygon(polygon: &PolygonGeometry) -> Result<()> {
	if polygon.0.is_empty() {
		return Err(GeometryError::invalid_format("Polygon without rings"));
	}
	polygon
		.0
		.iter()
		.try_for_each(|ring| check_coordinate_list(ring.coords(), "Polygon ring"))
}

/// Writes the part of the well-known text that follows the tag.
pub trait WriteWkt {
	fn write_wkt_body(&self, out: &mut String);
}

fn write_coordinates(out: &mut String, c: &Coordinates) {
	let _ = write!(out, "{} {}", format_number(c.x()), format_number(c.y()));
}

fn write_list<T>(out: &mut String, items: &[T], mut write_item: impl FnMut(&mut String, &T)) {
	out.push('(');
	for (index, item) in items.iter().enumerate() {
		if index > 0 {
			out.push(',');
		}
		write_item(out, item);
	}
	out.push(')');
}

fn write_ring(out: &mut String, ring: &Ring) {
	write_list(out, &ring.boundary(), write_coordinates);
}

impl WriteWkt for PointGeometry {
	fn write_wkt_body(&self, out: &mut String) {
		out.push('(');
		write_coordinates(out, &self.0);
		out.push(')');
	}
}

impl WriteWkt for LineStringGeometry {
	fn write_wkt_body(&self, out: &mut String) {
		write_list(out, &self.0, write_coordinates);
	}
}

impl WriteWkt for PolygonGeometry {
	fn write_wkt_body(&self, out: &mut String) {
		write_list(out, &self.0, write_ring);
	}
}

impl WriteWkt for MultiPointGeometry {
	fn write_wkt_body(&self, out: &mut String) {
		write_list(out, &self.0, |out, point| point.write_wkt_body(out));
	}
}

impl WriteWkt for MultiLineStringGeometry {
	fn write_wkt_body(&self, out: &mut String) {
		write_list(out, &self.0, |out, line| line.write_wkt_body(out));
	}
}

impl WriteWkt for MultiPolygonGeometry {
	fn write_wkt_body(&self, out: &mut String) {
		write_list(out, &self.0, |out, polygon| polygon.write_wkt_body(out));
	}
}

impl WriteWkt for GeometryCollection {
	fn write_wkt_body(&self, _out: &mut String) {
		unimplemented!("WKT formatting is not implemented for GEOMETRYCOLLECTION")
	}
}

impl WriteWkt for Geometry {
	fn write_wkt_body(&self, out: &mut String) {
		match self {
			Geometry::Point(g) => g.write_wkt_body(out),
			Geometry::LineString(g) => g.write_wkt_body(out),
			Geometry::Polygon(g) => g.write_wkt_body(out),
			Geometry::MultiPoint(g) => g.write_wkt_body(out),
			Geometry::MultiLineString(g) => g.write_wkt_body(out),
			Geometry::MultiPolygon(g) => g.write_wkt_body(out),
			Geometry::GeometryCollection(g) => g.write_wkt_body(out),
		}
	}
}
