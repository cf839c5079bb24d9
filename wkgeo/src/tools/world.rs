use anyhow::Result;
use std::path::PathBuf;
use wkgeo_geometry::{Coordinates, tfw::WorldFile, wkt::format_number};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// World file (*.tfw, *.jgw, *.pgw, ...)
	#[arg()]
	world_file: PathBuf,

	/// Pixel column
	#[arg(allow_negative_numbers = true)]
	x: f64,

	/// Pixel row
	#[arg(allow_negative_numbers = true)]
	y: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let world = WorldFile::load_file(&arguments.world_file)?;
	println!("{}", transform(&world, arguments.x, arguments.y));
	Ok(())
}

fn transform(world: &WorldFile, x: f64, y: f64) -> String {
	let result = world.transform(&Coordinates::new(x, y));
	format!("{} {}", format_number(result.x()), format_number(result.y()))
}
