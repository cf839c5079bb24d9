//! ESRI world files (`.tfw`, `.jgw`, ...): six numbers that place a raster image in map
//! coordinates.
//!
//! ```text
//! scale_x       pixel size in x
//! shear_y       rotation term
//! shear_x       rotation term
//! scale_y       pixel size in y, usually negative
//! translate_x   x of the upper left pixel
//! translate_y   y of the upper left pixel
//! ```

use crate::{Coordinates, GeometryError, wkt::Token, wkt::Tokenizer, wkt::format_number};
use anyhow::{Context, Result};
use log::debug;
use std::{fmt::Display, fs, io::Read, path::Path};

/// The affine transformation of a world file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldFile {
	pub scale_x: f64,
	pub shear_y: f64,
	pub shear_x: f64,
	pub scale_y: f64,
	pub translate_x: f64,
	pub translate_y: f64,
}

impl WorldFile {
	/// Creates a world file from its six values in file order.
	pub fn new(values: [f64; 6]) -> Self {
		let [scale_x, shear_y, shear_x, scale_y, translate_x, translate_y] = values;
		Self {
			scale_x,
			shear_y,
			shear_x,
			scale_y,
			translate_x,
			translate_y,
		}
	}

	/// The six values in file order.
	pub fn to_array(&self) -> [f64; 6] {
		[
			self.scale_x,
			self.shear_y,
			self.shear_x,
			self.scale_y,
			self.translate_x,
			self.translate_y,
		]
	}

	pub fn parse(text: &str) -> Result<Self, GeometryError> {
		let mut tokens = Tokenizer::new(text);
		let mut values = [0.0; 6];
		for value in &mut values {
			*value = tokens.next_value().ok_or_else(|| tokens.error("number expected"))?;
		}
		if tokens.next_token() != Token::Eof {
			return Err(tokens.error("no more tokens expected"));
		}
		Ok(Self::new(values))
	}

	pub fn load(mut reader: impl Read) -> Result<Self, GeometryError> {
		let mut text = String::new();
		reader.read_to_string(&mut text)?;
		Self::parse(&text)
	}

	pub fn load_file(path: &Path) -> Result<Self> {
		debug!("loading world file {path:?}");
		let text = fs::read_to_string(path).with_context(|| format!("reading world file {path:?}"))?;
		Self::parse(&text).with_context(|| format!("parsing world file {path:?}"))
	}

	/// Maps pixel coordinates to map coordinates.
	pub fn transform(&self, pixel: &Coordinates) -> Coordinates {
		Coordinates::new(
			self.scale_x * pixel.x() + self.shear_x * pixel.y() + self.translate_x,
			self.shear_y * pixel.x() + self.scale_y * pixel.y() + self.translate_y,
		)
	}
}

impl Display for WorldFile {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for value in self.to_array() {
			writeln!(f, "{}", format_number(value))?;
		}
		Ok(())
	}
}
