use super::{FileFormat, read_geometry};
use anyhow::{Context, Result, ensure};
use log::info;
use std::{fs, path::PathBuf};
use wkgeo_geometry::{Geometry, GeometryTrait, wkb::WkbWriter, wkt::format_geometry};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Supported input formats: *.wkt, *.wkb
	#[arg()]
	input_file: PathBuf,

	/// Supported output formats: *.wkt, *.wkb
	#[arg()]
	output_file: PathBuf,

	/// Write WKB in little-endian byte order (default is big-endian)
	#[arg(long)]
	little_endian: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let geometry = read_geometry(&arguments.input_file)?;
	ensure!(
		!matches!(geometry, Geometry::GeometryCollection(_)),
		"geometry collections can only be parsed, not written"
	);
	geometry
		.verify()
		.with_context(|| format!("verifying geometry of {:?}", arguments.input_file))?;

	let output = &arguments.output_file;
	let bytes = match FileFormat::from_path(output)? {
		FileFormat::Wkt => {
			let mut text = format_geometry(&geometry)?;
			text.push('\n');
			text.into_bytes()
		}
		FileFormat::Wkb => {
			let writer = if arguments.little_endian {
				WkbWriter::new_le()
			} else {
				WkbWriter::new()
			};
			writer.write(&geometry)?
		}
	};
	fs::write(output, bytes).with_context(|| format!("writing {output:?}"))?;

	info!("converted {:?} to {output:?}", arguments.input_file);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::path::Path;
	use tempfile::TempDir;

	fn convert(input: &Path, output: &Path, little_endian: bool) -> Result<()> {
		run(&Subcommand {
			input_file: input.to_path_buf(),
			output_file: output.to_path_buf(),
			little_endian,
		})
	}

	#[test]
	fn wkt_to_wkb_and_back() -> Result<()> {
		let dir = TempDir::new()?;
		let wkt = dir.path().join("line.wkt");
		let wkb = dir.path().join("line.wkb");
		let back = dir.path().join("back.wkt");
		fs::write(&wkt, "LINESTRING(0 0,10 5.5)\n")?;

		convert(&wkt, &wkb, false)?;
		assert_eq!(
			fs::read(&wkb)?,
			vec![
				0, 0, 0, 0, 2, 0, 0, 0, 2, //
				0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
				64, 36, 0, 0, 0, 0, 0, 0, 64, 22, 0, 0, 0, 0, 0, 0,
			]
		);

		convert(&wkb, &back, false)?;
		assert_eq!(fs::read_to_string(&back)?, "LINESTRING(0 0,10 5.5)\n");
		Ok(())
	}

	#[test]
	fn little_endian_output() -> Result<()> {
		let dir = TempDir::new()?;
		let wkt = dir.path().join("point.wkt");
		let wkb = dir.path().join("point.wkb");
		fs::write(&wkt, "POINT(1 2)")?;

		convert(&wkt, &wkb, true)?;
		let bytes = fs::read(&wkb)?;
		assert_eq!(bytes.len(), 21);
		assert_eq!(&bytes[0..5], &[1, 1, 0, 0, 0]);
		assert_eq!(&bytes[5..13], &1.0f64.to_le_bytes());
		assert_eq!(&bytes[13..21], &2.0f64.to_le_bytes());
		Ok(())
	}

	#[test]
	fn polygon_is_closed_on_output() -> Result<()> {
		let dir = TempDir::new()?;
		let input = dir.path().join("in.wkt");
		let output = dir.path().join("out.wkt");
		fs::write(&input, "polygon((0 0,4 0,4 4))")?;

		convert(&input, &output, false)?;
		assert_eq!(fs::read_to_string(&output)?, "POLYGON((0 0,4 0,4 4,0 0))\n");
		Ok(())
	}

	#[test]
	fn unknown_extension() -> Result<()> {
		let dir = TempDir::new()?;
		let input = dir.path().join("in.wkt");
		fs::write(&input, "POINT(1 2)")?;

		let err = convert(&input, &dir.path().join("out.json"), false).unwrap_err();
		assert!(err.to_string().starts_with("unknown file extension"));
		Ok(())
	}

	#[test]
	fn invalid_wkt() -> Result<()> {
		let dir = TempDir::new()?;
		let input = dir.path().join("in.wkt");
		fs::write(&input, "POINT(1, 2)")?;

		let err = convert(&input, &dir.path().join("out.wkb"), false).unwrap_err();
		assert_eq!(err.root_cause().to_string(), "y-value expected at position 7");
		Ok(())
	}

	#[test]
	fn collections_are_rejected() -> Result<()> {
		let dir = TempDir::new()?;
		let input = dir.path().join("in.wkt");
		fs::write(&input, "GEOMETRYCOLLECTION(POINT(1 2))")?;

		let err = convert(&input, &dir.path().join("out.wkb"), false).unwrap_err();
		assert_eq!(err.to_string(), "geometry collections can only be parsed, not written");
		Ok(())
	}
}
