
extern crate clap;
extern crate colored;
extern crate corr_dump_viz;

use clap::{Arg, App};
use colored::*;
use corr_dump_viz::DynError;
use corr_dump_viz::dump::{self, DumpSummary};
use corr_dump_viz::figure::plots;
use corr_dump_viz::render::{self, OutputFormat, RenderOptions};

fn parse_px(s:&str, name:&str) -> Result<u32, DynError> {
	let px:u32 = s.parse().map_err(|_| format!("Invalid {} '{}'", name, s))?;
	if px == 0 { return Err(format!("{} must be positive", name).into()); }
	Ok(px)
}

fn run() -> Result<(), DynError> {

	let matches = App::new("Correlator Dump Plot")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Plots early/prompt/late correlator power and the prompt I/Q constellation from a tracking channel dump")
		.arg(Arg::with_name("filename")
			.short("f").long("filename")
			.help("Input dump file")
			.takes_value(true).default_value(dump::DEFAULT_FILENAME))
		.arg(Arg::with_name("output_dir")
			.short("o").long("output_dir")
			.help("Directory for the rendered figures")
			.takes_value(true).default_value("."))
		.arg(Arg::with_name("prefix")
			.short("p").long("prefix")
			.help("File name prefix for the rendered figures")
			.takes_value(true).default_value("corr_dump"))
		.arg(Arg::with_name("format")
			.short("t").long("format")
			.takes_value(true).possible_values(&["png", "svg"]).default_value("png"))
		.arg(Arg::with_name("width")
			.short("W").long("width")
			.takes_value(true).default_value("1280"))
		.arg(Arg::with_name("height")
			.short("H").long("height")
			.takes_value(true).default_value("720"))
		.arg(Arg::with_name("summary")
			.short("s").long("summary")
			.help("Print summary statistics as JSON on stdout"))
		.get_matches();

	// Every argument has a default, so these are always present
	let fname:&str      = matches.value_of("filename").unwrap_or(dump::DEFAULT_FILENAME);
	let output_dir:&str = matches.value_of("output_dir").unwrap_or(".");
	let prefix:&str     = matches.value_of("prefix").unwrap_or("corr_dump");

	let opts = RenderOptions {
		width:  parse_px(matches.value_of("width").unwrap_or("1280"), "width")?,
		height: parse_px(matches.value_of("height").unwrap_or("720"), "height")?,
		format: matches.value_of("format").unwrap_or("png").parse::<OutputFormat>()?,
	};

	let table = dump::load(fname)?;
	eprintln!("Loaded {} records from {}", table.len(), &fname);

	let summary = DumpSummary::from_table(&table);
	if table.len() < 2 {
		eprintln!("{}", format!("Only {} record; plots will show single points", table.len()).yellow());
	}
	if summary.mean_prompt_radius == 0.0 {
		eprintln!("{}", "Prompt I/Q is zero everywhere; reference circle collapses to the origin".yellow());
	}

	let figures = plots::all_figures(&table);
	for path in render::save_all(&figures, output_dir, prefix, &opts)? {
		eprintln!("Wrote {}", format!("{}", path.display()).green());
	}

	if matches.is_present("summary") {
		println!("{}", serde_json::to_string_pretty(&summary)?);
	}

	Ok(())
}

fn main() {
	if let Err(e) = run() {
		eprintln!("{} {}", "Error:".red(), e);
		std::process::exit(1);
	}
}
