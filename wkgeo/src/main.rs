mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a geometry between WKT (*.wkt) and WKB (*.wkb) files
	Convert(tools::convert::Subcommand),

	/// Show type, dimension and extent of a geometry
	Probe(tools::probe::Subcommand),

	/// Evaluate the topological predicates between two geometries
	Relate(tools::relate::Subcommand),

	/// Transform pixel coordinates with a world file
	World(tools::world::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Relate(arguments) => tools::relate::run(arguments),
		Commands::World(arguments) => tools::world::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["wkgeo"]).unwrap_err().to_string();
		assert!(err.starts_with("Well-known text and well-known binary geometry codecs"));
		assert!(err.contains("\nUsage: wkgeo [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["wkgeo", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("wkgeo "));
	}

	#[test]
	fn convert_subcommand() {
		let output = run_command(vec!["wkgeo", "convert"]).unwrap_err().to_string();
		assert!(output.starts_with("Convert a geometry between WKT"));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["wkgeo", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show type, dimension and extent of a geometry"));
	}

	#[test]
	fn relate_subcommand() {
		let output = run_command(vec!["wkgeo", "relate"]).unwrap_err().to_string();
		assert!(output.starts_with("Evaluate the topological predicates"));
	}

	#[test]
	fn world_subcommand() {
		let output = run_command(vec!["wkgeo", "world"]).unwrap_err().to_string();
		assert!(output.starts_with("Transform pixel coordinates with a world file"));
	}
}
