
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use num_complex::Complex;
use serde::Serialize;

use crate::DumpErr;

mod summary;


pub use self::summary::DumpSummary;

pub const NUM_COLUMNS:usize = 10;
pub const DEFAULT_FILENAME:&str = "corr_dump.txt";

/// One dump epoch as written by the tracking channel testbench, one field per column.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct DumpRecord {
	pub dump_index:f64,
	pub i_early:f64,
	pub q_early:f64,
	pub i_prompt:f64,
	pub q_prompt:f64,
	pub i_late:f64,
	pub q_late:f64,
	pub early_power:f64,
	pub prompt_power:f64,
	pub late_power:f64,
}

impl DumpRecord {

	pub fn from_columns(c:[f64; NUM_COLUMNS]) -> Self {
		Self {
			dump_index:   c[0],
			i_early:      c[1],
			q_early:      c[2],
			i_prompt:     c[3],
			q_prompt:     c[4],
			i_late:       c[5],
			q_late:       c[6],
			early_power:  c[7],
			prompt_power: c[8],
			late_power:   c[9],
		}
	}

	pub fn early(&self)  -> Complex<f64> { Complex{ re: self.i_early,  im: self.q_early  } }
	pub fn prompt(&self) -> Complex<f64> { Complex{ re: self.i_prompt, im: self.q_prompt } }
	pub fn late(&self)   -> Complex<f64> { Complex{ re: self.i_late,   im: self.q_late   } }

	/// Parses one line of the dump file.  Returns Ok(None) for lines that are blank or only hold a comment.
	fn parse_line(line:&str, line_num:usize) -> Result<Option<Self>, DumpErr> {
		let content = match line.find('#') {
			Some(idx) => &line[..idx],
			None => line,
		};

		let tokens:Vec<&str> = content.split_whitespace().collect();
		if tokens.is_empty() { return Ok(None); }
		if tokens.len() != NUM_COLUMNS {
			return Err(DumpErr::FieldCount{ line: line_num, found: tokens.len() });
		}

		let mut cols = [0.0; NUM_COLUMNS];
		for (col, token) in cols.iter_mut().zip(tokens.iter()) {
			*col = token.parse().map_err(|_| DumpErr::NotNumeric{ line: line_num, token: token.to_string() })?;
		}

		Ok(Some(Self::from_columns(cols)))
	}

}

/// The full contents of a correlator dump file in file order.  Never empty once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpTable {
	records: Vec<DumpRecord>,
}

impl DumpTable {

	pub fn new(records:Vec<DumpRecord>) -> Result<Self, DumpErr> {
		if records.is_empty() { Err(DumpErr::Empty) } else { Ok(Self{ records }) }
	}

	pub fn records(&self) -> &[DumpRecord] { &self.records }
	pub fn len(&self) -> usize { self.records.len() }
	pub fn is_empty(&self) -> bool { self.records.is_empty() }

	fn column<F: Fn(&DumpRecord) -> f64>(&self, f:F) -> Vec<f64> { self.records.iter().map(f).collect() }

	// Column views
	pub fn dump_index(&self)   -> Vec<f64> { self.column(|r| r.dump_index) }
	pub fn early_power(&self)  -> Vec<f64> { self.column(|r| r.early_power) }
	pub fn prompt_power(&self) -> Vec<f64> { self.column(|r| r.prompt_power) }
	pub fn late_power(&self)   -> Vec<f64> { self.column(|r| r.late_power) }
	pub fn prompt_i(&self)     -> Vec<f64> { self.column(|r| r.i_prompt) }
	pub fn prompt_q(&self)     -> Vec<f64> { self.column(|r| r.q_prompt) }

	pub fn prompt(&self) -> Vec<Complex<f64>> { self.records.iter().map(|r| r.prompt()).collect() }

}

impl FromStr for DumpTable {
	type Err = DumpErr;

	fn from_str(s:&str) -> Result<Self, DumpErr> { from_reader(s.as_bytes()) }
}

/// Reads a whole dump table from any buffered source.  The first malformed line aborts the read.
pub fn from_reader<R: BufRead>(src:R) -> Result<DumpTable, DumpErr> {
	let mut records:Vec<DumpRecord> = vec![];
	for (idx, line) in src.lines().enumerate() {
		let line = line.map_err(|e| DumpErr::Io(e.to_string()))?;
		if let Some(r) = DumpRecord::parse_line(&line, idx+1)? { records.push(r); }
	}
	DumpTable::new(records)
}

pub fn load<P: AsRef<Path>>(path:P) -> Result<DumpTable, DumpErr> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|e| match e.kind() {
		ErrorKind::NotFound => DumpErr::FileNotFound(path.display().to_string()),
		_ => DumpErr::Io(format!("{}: {}", path.display(), e)),
	})?;
	from_reader(BufReader::new(file))
}
