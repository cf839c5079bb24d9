use super::{Endianness, WkbType};
use crate::{Coordinates, Geometry, GeometryError, LineStringGeometry, PointGeometry, PolygonGeometry};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use log::trace;
use std::io::Write;

type Result<T> = std::result::Result<T, GeometryError>;

/// Encodes geometries as WKB using one byte order for the whole geometry.
#[derive(Clone, Copy, Debug, Default)]
pub struct WkbWriter {
	endianness: Endianness,
}

impl WkbWriter {
	/// Big endian writer.
	pub fn new() -> Self {
		Self::with_byte_order(Endianness::BigEndian)
	}

	/// Little endian writer.
	pub fn new_le() -> Self {
		Self::with_byte_order(Endianness::LittleEndian)
	}

	pub fn with_byte_order(endianness: Endianness) -> Self {
		Self { endianness }
	}

	pub fn byte_order(&self) -> Endianness {
		self.endianness
	}

	/// Encodes `geometry` into a new buffer. Geometry collections produce no output.
	pub fn write(&self, geometry: &Geometry) -> Result<Vec<u8>> {
		let mut buffer = Vec::new();
		self.write_to(&mut buffer, geometry)?;
		Ok(buffer)
	}

	pub fn write_to<W: Write>(&self, writer: &mut W, geometry: &Geometry) -> Result<()> {
		match geometry {
			Geometry::Point(point) => self.write_point(writer, point),
			Geometry::LineString(line) => self.write_line_string(writer, line),
			Geometry::Polygon(polygon) => self.write_polygon(writer, polygon),
			Geometry::MultiPoint(multi) => {
				self.write_header(writer, WkbType::MultiPoint)?;
				self.write_count(writer, multi.0.len())?;
				multi.0.iter().try_for_each(|point| self.write_point(writer, point))
			}
			Geometry::MultiLineString(multi) => {
				self.write_header(writer, WkbType::MultiLineString)?;
				self.write_count(writer, multi.0.len())?;
				multi.0.iter().try_for_each(|line| self.write_line_string(writer, line))
			}
			Geometry::MultiPolygon(multi) => {
				self.write_header(writer, WkbType::MultiPolygon)?;
				self.write_count(writer, multi.0.len())?;
				multi.0.iter().try_for_each(|polygon| self.write_polygon(writer, polygon))
			}
			Geometry::GeometryCollection(_) => {
				trace!("skipping GEOMETRYCOLLECTION");
				Ok(())
			}
		}
	}

	fn write_header<W: Write>(&self, writer: &mut W, wkb_type: WkbType) -> Result<()> {
		writer.write_u8(self.endianness.into())?;
		self.write_u32(writer, wkb_type.into())
	}

	fn write_u32<W: Write>(&self, writer: &mut W, value: u32) -> Result<()> {
		match self.endianness {
			Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
			Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
		}
		Ok(())
	}

	fn write_count<W: Write>(&self, writer: &mut W, count: usize) -> Result<()> {
		let count = u32::try_from(count)
			.map_err(|_| GeometryError::invalid_format(format!("{count} elements do not fit into WKB")))?;
		self.write_u32(writer, count)
	}

	fn write_coordinates<W: Write>(&self, writer: &mut W, c: &Coordinates) -> Result<()> {
		match self.endianness {
			Endianness::BigEndian => {
				writer.write_f64::<BigEndian>(c.x())?;
				writer.write_f64::<BigEndian>(c.y())?;
			}
			Endianness::LittleEndian => {
				writer.write_f64::<LittleEndian>(c.x())?;
				writer.write_f64::<LittleEndian>(c.y())?;
			}
		}
		Ok(())
	}

	fn write_coordinate_list<W: Write>(&self, writer: &mut W, coords: &[Coordinates], name: &str) -> Result<()> {
		if coords.is_empty() {
			return Err(GeometryError::invalid_format(format!("{name} without points")));
		}
		self.write_count(writer, coords.len())?;
		coords.iter().try_for_each(|c| self.write_coordinates(writer, c))
	}

	fn write_point<W: Write>(&self, writer: &mut W, point: &PointGeometry) -> Result<()> {
		self.write_header(writer, WkbType::Point)?;
		self.write_coordinates(writer, &point.0)
	}

	fn write_line_string<W: Write>(&self, writer: &mut W, line: &LineStringGeometry) -> Result<()> {
		self.write_header(writer, WkbType::LineString)?;
		self.write_coordinate_list(writer, &line.0, "LineString")
	}

	fn write_polygon<W: Write>(&self, writer: &mut W, polygon: &PolygonGeometry) -> Result<()> {
		if polygon.0.is_empty() {
			return Err(GeometryError::invalid_format("Polygon without rings"));
		}
		self.write_header(writer, WkbType::Polygon)?;
		self.write_count(writer, polygon.0.len())?;
		polygon
			.0
			.iter()
			.try_for_each(|ring| self.write_coordinate_list(writer, &ring.boundary(), "Polygon ring"))
	}
}
