use super::read_geometry;
use anyhow::Result;
use std::{fmt::Write, path::PathBuf};
use wkgeo_geometry::{Geometry, GeometryTrait, wkt::format_number};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Geometry file, either *.wkt or *.wkb
	#[arg()]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let geometry = read_geometry(&arguments.input_file)?;
	print!("{}", describe(&geometry)?);
	Ok(())
}

fn describe(geometry: &Geometry) -> Result<String> {
	let mut report = String::new();
	writeln!(report, "type: {}", geometry.type_tag())?;
	writeln!(report, "dimension: {}", geometry.dimension())?;
	if let Some(count) = geometry.child_count() {
		writeln!(report, "children: {count}")?;
	}
	match geometry.compute_bounds() {
		Some(bounds) => {
			let bounds = bounds.map(format_number);
			writeln!(report, "bbox: [{}]", bounds.join(", "))?;
		}
		None => writeln!(report, "bbox: none")?,
	}
	if let Some(center) = geometry.center_point() {
		writeln!(report, "center: {} {}", format_number(center.x()), format_number(center.y()))?;
	}
	Ok(report)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::fs;
	use tempfile::TempDir;
	use wkgeo_geometry::GeometryCollection;

	#[rstest]
	#[case("POINT(1 2)", "type: POINT\ndimension: 0\nbbox: [1, 2, 1, 2]\ncenter: 1 2\n")]
	#[case(
		"POLYGON((0 0,4 0,4 3,0 3,0 0))",
		"type: POLYGON\ndimension: 2\nbbox: [0, 0, 4, 3]\ncenter: 2 1.5\n"
	)]
	#[case(
		"MULTIPOINT((0 0),(2 -2),(1 1))",
		"type: MULTIPOINT\ndimension: 1\nchildren: 3\nbbox: [0, -2, 2, 1]\ncenter: 1 -0.5\n"
	)]
	#[case(
		"GEOMETRYCOLLECTION(POINT(1 1),LINESTRING(0 0,3 3))",
		"type: GEOMETRYCOLLECTION\ndimension: 1\nchildren: 2\nbbox: [0, 0, 3, 3]\ncenter: 1.5 1.5\n"
	)]
	fn describe_geometry(#[case] wkt: &str, #[case] expected: &str) -> Result<()> {
		let geometry = Geometry::from_wkt(wkt)?;
		assert_eq!(describe(&geometry)?, expected);
		Ok(())
	}

	#[test]
	fn describe_empty_collection() -> Result<()> {
		let geometry = Geometry::GeometryCollection(GeometryCollection::default());
		assert_eq!(
			describe(&geometry)?,
			"type: GEOMETRYCOLLECTION\ndimension: 0\nchildren: 0\nbbox: none\n"
		);
		Ok(())
	}

	#[test]
	fn probe_file() -> Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join("shape.wkt");
		fs::write(&path, "MULTIPOLYGON(((0 0,1 0,1 1,0 0)),((2 2,3 2,3 3,2 2)))\n")?;
		run(&Subcommand { input_file: path })?;
		Ok(())
	}

	#[test]
	fn probe_rejects_nested_collection() -> Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join("nested.wkb");
		// a MULTIPOLYGON whose only member claims to be a GEOMETRYCOLLECTION
		fs::write(&path, [0, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0, 0, 0, 7, 0, 0, 0, 0])?;
		let err = run(&Subcommand { input_file: path }).unwrap_err();
		assert_eq!(
			err.root_cause().to_string(),
			"invalid format: Invalid geometry type encountered in MultiPolygon"
		);
		Ok(())
	}

	#[test]
	fn probe_missing_file() {
		let err = run(&Subcommand {
			input_file: PathBuf::from("does/not/exist.wkb"),
		})
		.unwrap_err();
		assert!(err.to_string().starts_with("reading \"does/not/exist.wkb\""));
	}
}
