use super::{Endianness, WkbType};
use crate::{
	Coordinates, Geometry, GeometryError, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, Ring,
};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::trace;
use std::io::Read;

type Result<T> = std::result::Result<T, GeometryError>;

/// Reads one geometry from a WKB encoded byte slice.
pub fn read(bytes: &[u8]) -> Result<Geometry> {
	WkbReader::new(bytes).read_geometry()
}

/// Decodes WKB geometries from a byte source. Not meant to be shared between threads; each reader
/// keeps the position of its source.
pub struct WkbReader<R: Read> {
	reader: R,
}

impl<R: Read> WkbReader<R> {
	pub fn new(reader: R) -> Self {
		Self { reader }
	}

	pub fn into_inner(self) -> R {
		self.reader
	}

	/// Reads the next geometry. Truncated input fails with [`GeometryError::Io`].
	///
	/// # Panics
	///
	/// Geometry collections (type code 7) are not supported.
	pub fn read_geometry(&mut self) -> Result<Geometry> {
		let (endianness, wkb_type) = self.read_header()?;
		trace!("reading {wkb_type:?} ({endianness:?})");

		Ok(match wkb_type {
			WkbType::Point => Geometry::Point(self.read_point(endianness)?),
			WkbType::LineString => Geometry::LineString(self.read_line_string(endianness)?),
			WkbType::Polygon => Geometry::Polygon(self.read_polygon(endianness)?),
			WkbType::MultiPoint => Geometry::MultiPoint(MultiPointGeometry(self.read_members(
				endianness,
				"MultiPoint",
				WkbType::Point,
				Self::read_point,
			)?)),
			WkbType::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(self.read_members(
				endianness,
				"MultiLineString",
				WkbType::LineString,
				Self::read_line_string,
			)?)),
			WkbType::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(self.read_members(
				endianness,
				"MultiPolygon",
				WkbType::Polygon,
				Self::read_polygon,
			)?)),
			WkbType::GeometryCollection => unimplemented!("WKB reading is not implemented for GEOMETRYCOLLECTION"),
		})
	}

	fn read_header(&mut self) -> Result<(Endianness, WkbType)> {
		let marker = self.reader.read_u8()?;
		let endianness = Endianness::try_from(marker)
			.map_err(|e| GeometryError::invalid_format(format!("unknown byte order marker {}", e.number)))?;
		let code = self.read_u32(endianness)?;
		let wkb_type = WkbType::try_from(code)
			.map_err(|e| GeometryError::invalid_format(format!("unknown geometry type {}", e.number)))?;
		Ok((endianness, wkb_type))
	}

	fn read_u32(&mut self, endianness: Endianness) -> Result<u32> {
		Ok(match endianness {
			Endianness::BigEndian => self.reader.read_u32::<BigEndian>()?,
			Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>()?,
		})
	}

	fn read_f64(&mut self, endianness: Endianness) -> Result<f64> {
		Ok(match endianness {
			Endianness::BigEndian => self.reader.read_f64::<BigEndian>()?,
			Endianness::LittleEndian => self.reader.read_f64::<LittleEndian>()?,
		})
	}

	fn read_coordinates(&mut self, endianness: Endianness) -> Result<Coordinates> {
		let x = self.read_f64(endianness)?;
		let y = self.read_f64(endianness)?;
		Ok(Coordinates::new(x, y))
	}

	// Counts come from untrusted input, so vectors grow as data actually arrives.
	fn read_coordinate_list(&mut self, endianness: Endianness, name: &str) -> Result<Vec<Coordinates>> {
		let count = self.read_u32(endianness)?;
		if count == 0 {
			return Err(GeometryError::invalid_format(format!("{name} without points")));
		}
		let mut coords = Vec::new();
		for _ in 0..count {
			coords.push(self.read_coordinates(endianness)?);
		}
		Ok(coords)
	}

	fn read_point(&mut self, endianness: Endianness) -> Result<PointGeometry> {
		Ok(PointGeometry(self.read_coordinates(endianness)?))
	}

	fn read_line_string(&mut self, endianness: Endianness) -> Result<LineStringGeometry> {
		Ok(LineStringGeometry(self.read_coordinate_list(endianness, "LineString")?))
	}

	fn read_polygon(&mut self, endianness: Endianness) -> Result<PolygonGeometry> {
		let count = self.read_u32(endianness)?;
		if count == 0 {
			return Err(GeometryError::invalid_format("Polygon without rings"));
		}
		let mut rings = Vec::new();
		for _ in 0..count {
			rings.push(Ring::auto_closed(self.read_coordinate_list(endianness, "Polygon ring")?));
		}
		Ok(PolygonGeometry(rings))
	}

	// Member headers are checked before their bodies are read, so members never nest.
	fn read_members<T>(
		&mut self,
		endianness: Endianness,
		container: &str,
		member_type: WkbType,
		mut read_member: impl FnMut(&mut Self, Endianness) -> Result<T>,
	) -> Result<Vec<T>> {
		let count = self.read_u32(endianness)?;
		let mut members = Vec::new();
		for _ in 0..count {
			let (member_endianness, wkb_type) = self.read_header()?;
			if wkb_type != member_type {
				return Err(GeometryError::invalid_format(format!(
					"Invalid geometry type encountered in {container}"
				)));
			}
			members.push(read_member(self, member_endianness)?);
		}
		Ok(members)
	}
}
