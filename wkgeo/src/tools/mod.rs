pub mod convert;
pub mod probe;
pub mod relate;
pub mod world;

use anyhow::{Context, Result, bail};
use log::debug;
use std::{fs, path::Path};
use wkgeo_geometry::{Geometry, wkb};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FileFormat {
	Wkt,
	Wkb,
}

impl FileFormat {
	pub fn from_path(path: &Path) -> Result<Self> {
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.map(str::to_ascii_lowercase)
			.unwrap_or_default();
		Ok(match extension.as_str() {
			"wkt" => FileFormat::Wkt,
			"wkb" => FileFormat::Wkb,
			_ => bail!("unknown file extension of {path:?}, expected *.wkt or *.wkb"),
		})
	}
}

pub fn read_geometry(path: &Path) -> Result<Geometry> {
	let format = FileFormat::from_path(path)?;
	debug!("reading {format:?} from {path:?}");
	match format {
		FileFormat::Wkt => {
			let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
			Geometry::from_wkt(text.trim()).with_context(|| format!("parsing {path:?}"))
		}
		FileFormat::Wkb => {
			let bytes = fs::read(path).with_context(|| format!("reading {path:?}"))?;
			if bytes.len() >= 5 && (bytes[1..5] == [0, 0, 0, 7] || bytes[1..5] == [7, 0, 0, 0]) {
				bail!("geometry collections are not supported in WKB");
			}
			wkb::read(&bytes).with_context(|| format!("parsing {path:?}"))
		}
	}
}

/// Parses a geometry given on the command line.
pub fn parse_argument(text: &str) -> Result<Geometry> {
	Geometry::from_wkt(text).with_context(|| format!("parsing {text:?}"))
}
