
use std::fs;
use std::path::{Path, PathBuf};

use crate::dump::DumpTable;
use crate::figure::Figure;
use crate::figure::plots;
use crate::render::{self, OutputFormat, RenderOptions};

#[test]
fn output_format_names() {
	assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
	assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
	assert!("jpeg".parse::<OutputFormat>().is_err());
	assert_eq!(OutputFormat::Svg.extension(), "svg");
}

#[test]
fn default_options() {
	let opts = RenderOptions::default();
	assert_eq!((opts.width, opts.height), (1280, 720));
	assert_eq!(opts.format, OutputFormat::Png);

	// 10 px margin on every side, 96 px for y labels, 48 px for x labels
	assert_eq!(opts.plotting_area_px(), (1280 - 20 - 96, 720 - 20 - 48));
}

#[test]
fn tiny_canvas_keeps_positive_area() {
	let opts = RenderOptions{ width: 16, height: 16, format: OutputFormat::Png };
	assert_eq!(opts.plotting_area_px(), (1, 1));
}

#[test]
fn output_paths() {
	let fig = Figure::new("iq_scatter", "I_prompt", "Q_prompt");
	let opts = RenderOptions{ format: OutputFormat::Svg, ..RenderOptions::default() };
	assert_eq!(render::output_path(Path::new("out"), "corr_dump", &fig, &opts), PathBuf::from("out/corr_dump_iq_scatter.svg"));
}

#[test]
fn palette_wraps() {
	let rgb = |idx:usize| { let c = render::series_color(idx); (c.0, c.1, c.2) };
	assert_eq!(rgb(0), rgb(6));
	assert_ne!(rgb(0), rgb(1));
	assert_eq!(rgb(0), (31, 119, 180));
}

fn saves_all_figures(table:&DumpTable, format:OutputFormat) {
	let tmp = tempfile::tempdir().unwrap();
	let dir = tmp.path().join("figures").join(format.extension());
	assert!(!dir.exists());

	let opts = RenderOptions{ format, ..RenderOptions::default() };
	let written = render::save_all(&plots::all_figures(table), &dir, "p", &opts).unwrap();

	let expected:Vec<PathBuf> = ["power", "iq_scatter", "iq_prompt"].iter()
		.map(|name| dir.join(format!("p_{}.{}", name, format.extension())))
		.collect();
	assert_eq!(written, expected);

	for path in written.iter() {
		let meta = fs::metadata(path).unwrap();
		assert!(meta.is_file());
		assert!(meta.len() > 0);
	}
}

#[test]
fn save_two_row_example() {
	let table:DumpTable = "0 1.0 0.0 3.0 4.0 2.0 0.0 1.0 25.0 4.0\n1 1.0 0.0 0.0 5.0 2.0 0.0 1.0 25.0 4.0".parse().unwrap();
	saves_all_figures(&table, OutputFormat::Png);
	saves_all_figures(&table, OutputFormat::Svg);
}

#[test]
fn save_single_zero_row() {
	let table:DumpTable = "0 0 0 0 0 0 0 0 0 0".parse().unwrap();
	saves_all_figures(&table, OutputFormat::Png);
	saves_all_figures(&table, OutputFormat::Svg);
}
