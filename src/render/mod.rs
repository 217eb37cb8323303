
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::DynError;
use crate::figure::{Figure, SeriesStyle};

#[cfg(test)]
mod tests;

const PLOT_FONT_SCALE:f64 = 1.2;
const CHART_MARGIN:i32 = 10;
const X_LABEL_AREA:i32 = 40;
const Y_LABEL_AREA:i32 = 80;
const MARKER_SIZE:i32 = 3;

/// matplotlib default colour cycle
const PALETTE:[RGBColor; 6] = [
	RGBColor(31, 119, 180),
	RGBColor(255, 127, 14),
	RGBColor(44, 160, 44),
	RGBColor(214, 39, 40),
	RGBColor(148, 103, 189),
	RGBColor(140, 86, 75),
];

fn scaled(base:i32) -> i32 { ((base as f64) * PLOT_FONT_SCALE).round() as i32 }

pub fn series_color(idx:usize) -> RGBColor { PALETTE[idx % PALETTE.len()] }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	Png,
	Svg,
}

impl OutputFormat {

	pub fn extension(&self) -> &'static str {
		match self {
			OutputFormat::Png => "png",
			OutputFormat::Svg => "svg",
		}
	}

}

impl FromStr for OutputFormat {
	type Err = DynError;

	fn from_str(s:&str) -> Result<Self, DynError> {
		match s.to_ascii_lowercase().as_str() {
			"png" => Ok(OutputFormat::Png),
			"svg" => Ok(OutputFormat::Svg),
			other => Err(format!("Unsupported output format '{}'", other).into()),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
	pub width:u32,
	pub height:u32,
	pub format:OutputFormat,
}

impl Default for RenderOptions {
	fn default() -> Self { Self{ width: 1280, height: 720, format: OutputFormat::Png } }
}

impl RenderOptions {

	/// Size in pixels of the region inside the axes, which is what the equal-aspect ranges are fitted to.
	pub fn plotting_area_px(&self) -> (u32, u32) {
		let w = self.width as i32 - 2*CHART_MARGIN - scaled(Y_LABEL_AREA);
		let h = self.height as i32 - 2*CHART_MARGIN - scaled(X_LABEL_AREA);
		(w.max(1) as u32, h.max(1) as u32)
	}

}

pub fn output_path(dir:&Path, prefix:&str, figure:&Figure, opts:&RenderOptions) -> PathBuf {
	dir.join(format!("{}_{}.{}", prefix, figure.name, opts.format.extension()))
}

fn draw<DB: DrawingBackend>(root:DrawingArea<DB, Shift>, figure:&Figure, opts:&RenderOptions) -> Result<(), DynError>
	where DB::ErrorType: 'static {

	root.fill(&WHITE)?;

	let ranges = figure.axis_ranges(opts.plotting_area_px());

	let mut chart = ChartBuilder::on(&root)
		.margin(CHART_MARGIN)
		.x_label_area_size(scaled(X_LABEL_AREA))
		.y_label_area_size(scaled(Y_LABEL_AREA))
		.build_cartesian_2d(ranges.x.0..ranges.x.1, ranges.y.0..ranges.y.1)?;

	let mut mesh = chart.configure_mesh();
	mesh.x_desc(figure.x_label.as_str())
		.y_desc(figure.y_label.as_str())
		.label_style(("sans-serif", scaled(20)).into_font())
		.axis_desc_style(("sans-serif", scaled(24)).into_font())
		.light_line_style(WHITE.mix(0.0));
	if !figure.grid { mesh.disable_mesh(); }
	mesh.draw()?;

	for (idx, series) in figure.series.iter().enumerate() {
		let color = series_color(idx);
		match series.style {
			SeriesStyle::Line => {
				chart.draw_series(LineSeries::new(series.points.iter().cloned(), color.stroke_width(2)))?
					.label(series.label.as_str())
					.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
			},
			SeriesStyle::Markers => {
				chart.draw_series(series.points.iter().map(|p| Circle::new(*p, MARKER_SIZE, color.filled())))?
					.label(series.label.as_str())
					.legend(move |(x, y)| Circle::new((x + 10, y), MARKER_SIZE, color.filled()));
			},
		}
	}

	chart
		.configure_series_labels()
		.position(SeriesLabelPosition::UpperRight)
		.border_style(&BLACK)
		.background_style(&WHITE.mix(0.8))
		.label_font(("sans-serif", scaled(20)).into_font())
		.draw()?;

	root.present()?;
	Ok(())
}

pub fn save<P: AsRef<Path>>(figure:&Figure, path:P, opts:&RenderOptions) -> Result<(), DynError> {
	let path = path.as_ref();
	let size = (opts.width, opts.height);
	match opts.format {
		OutputFormat::Png => draw(BitMapBackend::new(path, size).into_drawing_area(), figure, opts),
		OutputFormat::Svg => draw(SVGBackend::new(path, size).into_drawing_area(), figure, opts),
	}
}

/// Writes every figure to `dir`, creating it if needed.  Returns the paths written, in figure order.
pub fn save_all<P: AsRef<Path>>(figures:&[Figure], dir:P, prefix:&str, opts:&RenderOptions) -> Result<Vec<PathBuf>, DynError> {
	let dir = dir.as_ref();
	fs::create_dir_all(dir)?;

	let mut written:Vec<PathBuf> = vec![];
	for figure in figures {
		let path = output_path(dir, prefix, figure, opts);
		save(figure, &path, opts)?;
		written.push(path);
	}
	Ok(written)
}
