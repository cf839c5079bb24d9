use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Geometry type codes of the two-dimensional WKB encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WkbType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPoint = 4,
	MultiLineString = 5,
	MultiPolygon = 6,
	GeometryCollection = 7,
}

/// Byte order marker that starts every WKB geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
	#[default]
	BigEndian = 0,
	LittleEndian = 1,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_codes() {
		assert_eq!(WkbType::try_from(3).unwrap(), WkbType::Polygon);
		assert_eq!(u32::from(WkbType::GeometryCollection), 7);
		assert!(WkbType::try_from(0).is_err());
		assert!(WkbType::try_from(1001).is_err());
	}

	#[test]
	fn byte_order_markers() {
		assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
		assert_eq!(Endianness::try_from(1).unwrap(), Endianness::LittleEndian);
		assert!(Endianness::try_from(2).is_err());
		assert_eq!(u8::from(Endianness::default()), 0);
	}
}
