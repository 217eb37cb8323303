
use serde::Serialize;

use crate::dump::DumpTable;
use crate::figure::plots;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct DumpSummary {
	pub num_records:usize,
	pub first_dump_index:f64,
	pub last_dump_index:f64,
	pub mean_early_magnitude:f64,
	pub mean_prompt_radius:f64,
	pub mean_late_magnitude:f64,
	pub mean_early_power:f64,
	pub mean_prompt_power:f64,
	pub mean_late_power:f64,
	/// Largest |prompt_power - (i_prompt^2 + q_prompt^2)| over all records
	pub max_prompt_power_residual:f64,
}

fn mean(xs:&[f64]) -> f64 { xs.iter().sum::<f64>() / (xs.len() as f64) }

impl DumpSummary {

	pub fn from_table(table:&DumpTable) -> Self {
		let records = table.records();
		let max_prompt_power_residual:f64 = records.iter()
			.map(|r| (r.prompt_power - r.prompt().norm_sqr()).abs())
			.fold(0.0, f64::max);

		let early_mags:Vec<f64> = records.iter().map(|r| r.early().norm()).collect();
		let late_mags:Vec<f64>  = records.iter().map(|r| r.late().norm()).collect();

		Self {
			num_records: records.len(),
			first_dump_index: records.first().map(|r| r.dump_index).unwrap_or(0.0),
			last_dump_index:  records.last().map(|r| r.dump_index).unwrap_or(0.0),
			mean_early_magnitude: mean(&early_mags),
			mean_prompt_radius: plots::mean_prompt_radius(table),
			mean_late_magnitude:  mean(&late_mags),
			mean_early_power:  mean(&table.early_power()),
			mean_prompt_power: mean(&table.prompt_power()),
			mean_late_power:   mean(&table.late_power()),
			max_prompt_power_residual,
		}
	}

}
