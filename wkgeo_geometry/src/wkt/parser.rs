//! Recursive descent parser for well-known text.
//!
//! ```text
//! geometry  = tag body
//! point     = "(" x y ")"
//! linestring= "(" x y ("," x y)* ")"
//! polygon   = "(" linestring ("," linestring)* ")"
//! multi-X   = "(" X ("," X)* ")"
//! collection= "(" geometry ("," geometry)* ")"
//! ```
//!
//! Keywords are case-insensitive. A number directly followed by a word starting with `e` or `E`
//! is joined with it and read again, so `5e1` is 50 and `-1e-1` is -0.1.

use super::{Token, Tokenizer};
use crate::{
	Coordinates, Geometry, GeometryCollection, GeometryError, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, Ring,
};
use log::trace;

type Result<T> = std::result::Result<T, GeometryError>;

/// Geometry tags in the order they are tried.
const TAGS: [&str; 7] = [
	"POINT",
	"LINESTRING",
	"POLYGON",
	"MULTIPOINT",
	"MULTILINESTRING",
	"MULTIPOLYGON",
	"GEOMETRYCOLLECTION",
];

/// Parses a single geometry from well-known text. Anything after the geometry is ignored.
pub fn parse(text: &str) -> Result<Geometry> {
	WktParser::new(text).parse_geometry()
}

/// Holds the tokenizer state of one parse. Use one instance per input.
pub struct WktParser<'a> {
	tokens: Tokenizer<'a>,
}

impl<'a> WktParser<'a> {
	pub fn new(text: &'a str) -> Self {
		Self {
			tokens: Tokenizer::new(text),
		}
	}

	pub fn parse_geometry(&mut self) -> Result<Geometry> {
		let token = self.tokens.next_token();
		let tag = match &token {
			Token::Word(word) => TAGS.iter().find(|tag| tag.eq_ignore_ascii_case(word)),
			_ => None,
		};
		let Some(tag) = tag else {
			return Err(self.tokens.error("geometry type name expected"));
		};
		trace!("parsing {tag} at position {}", self.tokens.token_start());

		Ok(match *tag {
			"POINT" => Geometry::Point(self.parse_point()?),
			"LINESTRING" => Geometry::LineString(self.parse_line_string()?),
			"POLYGON" => Geometry::Polygon(self.parse_polygon()?),
			"MULTIPOINT" => Geometry::MultiPoint(MultiPointGeometry(self.parse_list(Self::parse_multi_point_member)?)),
			"MULTILINESTRING" => {
				Geometry::MultiLineString(MultiLineStringGeometry(self.parse_list(Self::parse_line_string)?))
			}
			"MULTIPOLYGON" => Geometry::MultiPolygon(MultiPolygonGeometry(self.parse_list(Self::parse_polygon)?)),
			_ => Geometry::GeometryCollection(GeometryCollection(self.parse_list(Self::parse_geometry)?)),
		})
	}

	fn expect_char(&mut self, expected: char) -> Result<()> {
		match self.tokens.next_token() {
			Token::Char(c) if c == expected => Ok(()),
			_ => Err(self.tokens.error(&format!("'{expected}' expected"))),
		}
	}

	/// `"(" item ("," item)* ")"`
	fn parse_list<T>(&mut self, mut parse_item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		self.expect_char('(')?;
		let mut items = Vec::new();
		loop {
			items.push(parse_item(self)?);
			match self.tokens.next_token() {
				Token::Char(',') => {}
				Token::Char(')') => return Ok(items),
				_ => return Err(self.tokens.error("',' or ')' expected")),
			}
		}
	}

	fn parse_value(&mut self, axis: char) -> Result<f64> {
		self
			.tokens
			.next_value()
			.ok_or_else(|| self.tokens.error(&format!("{axis}-value expected")))
	}

	fn parse_coordinates(&mut self) -> Result<Coordinates> {
		let x = self.parse_value('x')?;
		let y = self.parse_value('y')?;
		Ok(Coordinates::new(x, y))
	}

	fn parse_point(&mut self) -> Result<PointGeometry> {
		self.expect_char('(')?;
		let point = PointGeometry(self.parse_coordinates()?);
		self.expect_char(')')?;
		Ok(point)
	}

	/// Members are usually written as `(x y)`, but bare `x y` pairs are accepted as well.
	fn parse_multi_point_member(&mut self) -> Result<PointGeometry> {
		let token = self.tokens.next_token();
		let bracketed = token == Token::Char('(');
		self.tokens.push_back(token);
		if bracketed {
			self.parse_point()
		} else {
			Ok(PointGeometry(self.parse_coordinates()?))
		}
	}

	fn parse_line_string(&mut self) -> Result<LineStringGeometry> {
		Ok(LineStringGeometry(self.parse_list(Self::parse_coordinates)?))
	}

	fn parse_polygon(&mut self) -> Result<PolygonGeometry> {
		let rings = self.parse_list(|parser| Ok(Ring::auto_closed(parser.parse_line_string()?.0)))?;
		Ok(PolygonGeometry(rings))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryTrait, Ternary};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("1,2", "geometry type name expected", 0)]
	#[case("", "geometry type name expected", 0)]
	#[case("Point 1 2", "'(' expected", 6)]
	#[case("Point", "'(' expected", 5)]
	#[case("Point(1 2", "')' expected", 9)]
	#[case("Point(1 2]", "')' expected", 9)]
	#[case("Point(,1 2)", "x-value expected", 6)]
	#[case("Point(1, 2)", "y-value expected", 7)]
	#[case("Point(1 2e3b4)", "y-value expected", 8)]
	#[case("POINT(1e999 0)", "x-value expected", 6)]
	#[case("POINT(0 -1e999)", "y-value expected", 8)]
	#[case("Polyfon((1 2,2 3,5 3))", "geometry type name expected", 0)]
	#[case("Polygon((1 2,2 3,5 3),1 2,2 3,5 3))", "'(' expected", 22)]
	#[case("Polygon((1 2 2 3 5 3))", "',' or ')' expected", 13)]
	#[case("Polygon((1 2,2 3,5 3)(1 2,2 3,5 3))", "',' or ')' expected", 21)]
	#[case("GEOMETRYCOLLECTION(POINT(1 2),(3 4))", "geometry type name expected", 30)]
	fn parse_errors(#[case] text: &str, #[case] message: &str, #[case] offset: usize) {
		let error = parse(text).unwrap_err();
		assert_eq!(error.parse_message(), Some(message), "{text}");
		assert_eq!(error.to_string(), format!("{message} at position {offset}"), "{text}");
	}

	#[rstest]
	#[case("POINT (0.1   -0.2 )", "POINT(0.1 -0.2)")]
	#[case("point(4.3 5.8)", "POINT(4.3 5.8)")]
	#[case("POINT(-3.0 -0.132)", "POINT(-3 -0.132)")]
	#[case("LineString(1 2,3 4.3,  -0.6 5)", "LINESTRING(1 2,3 4.3,-0.6 5)")]
	#[case("Polygon ((1 2,3 4,    5 6e1,   1 2))", "POLYGON((1 2,3 4,5 60,1 2))")]
	#[case("Polygon ((-1e-1 2,3 4,  5e1    6, -1e-1 2))", "POLYGON((-0.1 2,3 4,50 6,-0.1 2))")]
	#[case(
		"POLYGON( (1 2,3 4, 5 6,1 2) , (7 8,9 10,11 12, 7 8) )",
		"POLYGON((1 2,3 4,5 6,1 2),(7 8,9 10,11 12,7 8))"
	)]
	#[case("POLYGON((1 2,3 4,5 6))", "POLYGON((1 2,3 4,5 6,1 2))")]
	#[case("MultiPoint((2.3 4.5),(-3 1.9))", "MULTIPOINT((2.3 4.5),(-3 1.9))")]
	#[case("MULTIPOINT(2.3 4.5,-3 1.9)", "MULTIPOINT((2.3 4.5),(-3 1.9))")]
	#[case("multilinestring((3.2 4.7,5 8,6 7),(1 2,3 4,5 6))", "MULTILINESTRING((3.2 4.7,5 8,6 7),(1 2,3 4,5 6))")]
	#[case(
		"MULTIPOLYGON(((-180 -90,-180 0,0 0,0 -90,-180 -90)),((-180 -90,-180 0,360 0,360 -90,-180 -90)))",
		"MULTIPOLYGON(((-180 -90,-180 0,0 0,0 -90,-180 -90)),((-180 -90,-180 0,360 0,360 -90,-180 -90)))"
	)]
	#[case("POINT(1 2) trailing", "POINT(1 2)")]
	#[case("POINT(1 2E2)", "POINT(1 200)")]
	fn parse_and_format(#[case] text: &str, #[case] expected: &str) {
		let geometry = parse(text).unwrap();
		assert_eq!(geometry.as_text(), expected);
		assert_eq!(parse(expected).unwrap().as_text(), expected);
	}

	#[test]
	fn exponent_needs_adjacent_word() {
		// "e1" separated by whitespace is not an exponent but an unexpected token
		let error = parse("POINT(5 e1)").unwrap_err();
		assert_eq!(error.parse_message(), Some("y-value expected"));
		let error = parse("POINT(5 6 e1)").unwrap_err();
		assert_eq!(error.parse_message(), Some("')' expected"));
	}

	#[test]
	fn auto_closed_polygons_are_equal() {
		let open = parse("POLYGON((1 2,3 4,5 6))").unwrap();
		let closed = parse("POLYGON((1 2,3 4,5 6,1 2))").unwrap();
		assert_eq!(open.equals(Some(&closed)), Ternary::True);
		assert_eq!(open, closed);
	}

	#[test]
	fn geometry_collection() {
		let geometry = parse("GeometryCollection(POINT(1 2), LINESTRING(0 0,1 1),GEOMETRYCOLLECTION(POINT(3 4)))").unwrap();
		let Geometry::GeometryCollection(collection) = &geometry else {
			panic!("expected a collection, got {geometry:?}");
		};
		assert_eq!(collection.0.len(), 3);
		assert_eq!(collection.0[0], Geometry::new_point([1.0, 2.0]));
		assert_eq!(collection.0[1].type_tag(), "LINESTRING");
		assert_eq!(collection.0[2].type_tag(), "GEOMETRYCOLLECTION");
		assert_eq!(geometry.dimension(), 1);
	}

	#[test]
	fn parser_instance() {
		let mut parser = WktParser::new("POINT(1 2)");
		assert_eq!(parser.parse_geometry().unwrap(), Geometry::new_point([1.0, 2.0]));
		assert!(parser.parse_geometry().is_err());
	}
}
