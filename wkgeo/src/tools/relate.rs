use super::parse_argument;
use anyhow::Result;
use wkgeo_geometry::{Geometry, Ternary};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// First geometry as WKT, e.g. "POLYGON((0 0,4 0,4 4,0 4))"
	#[arg()]
	geometry_a: String,

	/// Second geometry as WKT
	#[arg()]
	geometry_b: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let a = parse_argument(&arguments.geometry_a)?;
	let b = parse_argument(&arguments.geometry_b)?;
	for (name, value) in relate(&a, &b) {
		println!("{name}: {}", format_value(value));
	}
	Ok(())
}

// `disjoint` and `contains` have no answer for a geometry collection as receiver.
fn can_receive(geometry: &Geometry) -> bool {
	!matches!(geometry, Geometry::GeometryCollection(_))
}

fn relate(a: &Geometry, b: &Geometry) -> [(&'static str, Option<Ternary>); 5] {
	[
		("equals", Some(a.equals(Some(b)))),
		("disjoint", can_receive(a).then(|| a.disjoint(Some(b)))),
		("intersects", can_receive(b).then(|| a.intersects(Some(b)))),
		("contains", can_receive(a).then(|| a.contains(Some(b)))),
		("within", can_receive(b).then(|| a.within(Some(b)))),
	]
}

fn format_value(value: Option<Ternary>) -> String {
	value.map_or_else(|| String::from("UNSUPPORTED"), |value| value.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn relate_text(a: &str, b: &str) -> Result<String> {
		let a = parse_argument(a)?;
		let b = parse_argument(b)?;
		Ok(relate(&a, &b)
			.iter()
			.map(|(name, value)| format!("{name}: {}", format_value(*value)))
			.collect::<Vec<_>>()
			.join("\n"))
	}

	#[rstest]
	#[case(
		"POLYGON((0 0,4 0,4 4,0 4))",
		"POINT(1 1)",
		"equals: FALSE\ndisjoint: FALSE\nintersects: TRUE\ncontains: TRUE\nwithin: FALSE"
	)]
	#[case(
		"POINT(1 1)",
		"POLYGON((0 0,4 0,4 4,0 4))",
		"equals: FALSE\ndisjoint: FALSE\nintersects: TRUE\ncontains: FALSE\nwithin: TRUE"
	)]
	#[case(
		"POLYGON((0 0,4 0,4 4,0 4))",
		"POLYGON((10 10,12 10,12 12,10 12))",
		"equals: FALSE\ndisjoint: TRUE\nintersects: FALSE\ncontains: FALSE\nwithin: FALSE"
	)]
	#[case(
		"POLYGON((0 0,4 0,4 4,0 4))",
		"POLYGON((4 4,0 4,0 0,4 0))",
		"equals: TRUE\ndisjoint: FALSE\nintersects: TRUE\ncontains: TRUE\nwithin: TRUE"
	)]
	#[case(
		"GEOMETRYCOLLECTION(POLYGON((1 1,2 1,2 2,1 2)))",
		"POLYGON((0 0,4 0,4 4,0 4))",
		"equals: FALSE\ndisjoint: UNSUPPORTED\nintersects: TRUE\ncontains: UNSUPPORTED\nwithin: TRUE"
	)]
	#[case(
		"POINT(1 1)",
		"GEOMETRYCOLLECTION(POINT(1 1))",
		"equals: FALSE\ndisjoint: FALSE\nintersects: UNSUPPORTED\ncontains: FALSE\nwithin: UNSUPPORTED"
	)]
	#[case(
		"GEOMETRYCOLLECTION(POINT(1 1))",
		"GEOMETRYCOLLECTION(POINT(1 1))",
		"equals: TRUE\ndisjoint: UNSUPPORTED\nintersects: UNSUPPORTED\ncontains: UNSUPPORTED\nwithin: UNSUPPORTED"
	)]
	fn relate_geometries(#[case] a: &str, #[case] b: &str, #[case] expected: &str) -> Result<()> {
		assert_eq!(relate_text(a, b)?, expected);
		Ok(())
	}

	#[test]
	fn run_with_collection() -> Result<()> {
		run(&Subcommand {
			geometry_a: "GEOMETRYCOLLECTION(POINT(1 1))".to_string(),
			geometry_b: "POINT(1 1)".to_string(),
		})
	}

	#[test]
	fn invalid_argument() {
		let err = run(&Subcommand {
			geometry_a: "POINT(1 1)".to_string(),
			geometry_b: "POINT(1".to_string(),
		})
		.unwrap_err();
		assert_eq!(err.to_string(), "parsing \"POINT(1\"");
		assert_eq!(err.root_cause().to_string(), "y-value expected at position 7");
	}
}
