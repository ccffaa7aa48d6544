use anyhow::{Result, bail};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};
use wgs84tiler::{
	ErrorPolicy, GeoBounds, ResampleFilter, SliceParameters, TargetGeometry, TileFormat, plan_slices, slice_file,
};
use wgs84tiler_image::format::source_dimensions;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	arg_required_else_help = true, // Show help instead of an error when called without arguments
)]
struct Cli {
	/// georeferenced source image: *.jpg, *.png or *.webp
	#[arg(short, long, value_name = "FILE")]
	file: PathBuf,

	/// latitude of the northern edge
	#[arg(long, value_name = "LAT", allow_negative_numbers = true, display_order = 1)]
	top: f64,

	/// latitude of the southern edge
	#[arg(long, value_name = "LAT", allow_negative_numbers = true, display_order = 1)]
	bottom: f64,

	/// longitude of the western edge
	#[arg(long, value_name = "LON", allow_negative_numbers = true, display_order = 1)]
	left: f64,

	/// longitude of the eastern edge
	#[arg(long, value_name = "LON", allow_negative_numbers = true, display_order = 1)]
	right: f64,

	/// zoom level of the tiles
	#[arg(short, long, value_name = "int", default_value_t = 15, display_order = 2)]
	zoom: u8,

	/// tile folder, defaults to the directory of the source image
	#[arg(short, long, value_name = "DIR", display_order = 2)]
	out: Option<PathBuf>,

	/// tile file format
	#[arg(long, value_enum, default_value_t = TileFormat::PNG, display_order = 3)]
	format: TileFormat,

	/// resampling filter
	#[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3, display_order = 3)]
	filter: ResampleFilter,

	/// stop at the first tile that can't be written
	#[arg(long, display_order = 3)]
	abort_on_error: bool,

	/// print the tiles that would be written, without writing them
	#[arg(long, display_order = 3)]
	dry_run: bool,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>, // Set verbosity flag
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let bounds = GeoBounds::new(cli.top, cli.bottom, cli.left, cli.right)?;
	let output_dir = output_dir(&cli);

	if cli.dry_run {
		return print_plan(&cli.file, &bounds, cli.zoom);
	}

	let parameters = SliceParameters::default()
		.with_tile_format(cli.format)
		.with_filter(cli.filter)
		.with_error_policy(if cli.abort_on_error {
			ErrorPolicy::Abort
		} else {
			ErrorPolicy::Continue
		});

	eprintln!("slice {:?} into {:?}", cli.file, output_dir);

	let report = slice_file(&cli.file, &bounds, cli.zoom, &output_dir, &parameters)?;
	println!("{report}");

	if !report.is_complete() {
		bail!(
			"{} tiles could not be written, first failure: {}",
			report.failures.len(),
			report.failures[0]
		);
	}

	Ok(())
}

fn output_dir(cli: &Cli) -> PathBuf {
	match &cli.out {
		Some(out) => out.clone(),
		None => match cli.file.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
			_ => PathBuf::from("."),
		},
	}
}

fn print_plan(file: &Path, bounds: &GeoBounds, zoom: u8) -> Result<()> {
	let (width, height) = source_dimensions(file)?;
	let geometry = TargetGeometry::new(width, height, bounds, zoom)?;
	let grid = geometry.grid;

	println!("source:    {width}x{height}");
	println!("resampled: {}x{}", geometry.size.width, geometry.size.height);
	println!(
		"tiles:     {} (x {}..={}, y {}..={})",
		grid.count(),
		grid.left,
		grid.right,
		grid.top,
		grid.bottom
	);
	for cell in plan_slices(&geometry) {
		println!(
			"{} {:?} at {},{}",
			cell.coord, cell.region, cell.shift.left, cell.shift.top
		);
	}
	Ok(())
}
