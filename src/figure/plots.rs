
use crate::dump::DumpTable;
use crate::figure::{Figure, Series, SeriesStyle};

pub const CIRCLE_STEP_DEG:usize = 5;
pub const CIRCLE_NUM_POINTS:usize = 360 / CIRCLE_STEP_DEG + 1;

pub const LABEL_DUMP_INDEX:&str = "Dump index";
pub const LABEL_PROMPT_POWER:&str = "Prompt power";
pub const LABEL_EARLY_POWER:&str = "Early power";
pub const LABEL_LATE_POWER:&str = "Late power";
pub const LABEL_PROMPT_IQ:&str = "Prompt I/Q";
pub const LABEL_I_PROMPT:&str = "I Prompt";
pub const LABEL_Q_PROMPT:&str = "Q Prompt";

pub fn prompt_magnitudes(table:&DumpTable) -> Vec<f64> {
	table.prompt().iter().map(|c| c.norm()).collect()
}

/// Mean of |prompt| over all records, computed from the raw I/Q columns rather than the stored prompt power.
pub fn mean_prompt_radius(table:&DumpTable) -> f64 {
	let mags = prompt_magnitudes(table);
	mags.iter().sum::<f64>() / (mags.len() as f64)
}

/// Points on a circle of radius r every 5 degrees from 0 through 360 inclusive.  The last point repeats the first exactly.
pub fn reference_circle(r:f64) -> Vec<(f64, f64)> {
	(0..CIRCLE_NUM_POINTS).map(|k| {
		let theta = (((k * CIRCLE_STEP_DEG) % 360) as f64).to_radians();
		(r * theta.cos(), r * theta.sin())
	}).collect()
}

pub fn circle_label(r:f64) -> String { format!("Mean radius circle (r={:.2})", r) }

pub fn power_vs_index(table:&DumpTable) -> Figure {
	let t = table.dump_index();
	Figure::new("power", LABEL_DUMP_INDEX, "Power (I^2 + Q^2)")
		.with_series(Series::zip(LABEL_PROMPT_POWER, SeriesStyle::Line, &t, &table.prompt_power()))
		.with_series(Series::zip(LABEL_EARLY_POWER,  SeriesStyle::Line, &t, &table.early_power()))
		.with_series(Series::zip(LABEL_LATE_POWER,   SeriesStyle::Line, &t, &table.late_power()))
}

pub fn iq_scatter(table:&DumpTable) -> Figure {
	let r = mean_prompt_radius(table);
	Figure::new("iq_scatter", "I_prompt", "Q_prompt")
		.with_series(Series::zip(LABEL_PROMPT_IQ, SeriesStyle::Markers, &table.prompt_i(), &table.prompt_q()))
		.with_series(Series::line(&circle_label(r), reference_circle(r)))
		.with_equal_aspect()
}

pub fn iq_vs_index(table:&DumpTable) -> Figure {
	let t = table.dump_index();
	Figure::new("iq_prompt", LABEL_DUMP_INDEX, "I/Q_prompt")
		.with_series(Series::zip(LABEL_I_PROMPT, SeriesStyle::Line, &t, &table.prompt_i()))
		.with_series(Series::zip(LABEL_Q_PROMPT, SeriesStyle::Line, &t, &table.prompt_q()))
}

pub fn all_figures(table:&DumpTable) -> Vec<Figure> {
	vec![power_vs_index(table), iq_scatter(table), iq_vs_index(table)]
}
