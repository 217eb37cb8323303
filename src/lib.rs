
use std::fmt;

pub mod dump;
pub mod figure;
pub mod render;

pub type DynError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DumpErr {
	FileNotFound(String),
	Io(String),
	FieldCount{ line:usize, found:usize },
	NotNumeric{ line:usize, token:String },
	Empty,
}

impl fmt::Display for DumpErr {

	fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
		match self {
			DumpErr::FileNotFound(path)          => write!(f, "Unable to find dump file {}", path),
			DumpErr::Io(msg)                     => write!(f, "Unable to read dump file: {}", msg),
			DumpErr::FieldCount{ line, found }   => write!(f, "Line {}: expected {} fields, found {}", line, dump::NUM_COLUMNS, found),
			DumpErr::NotNumeric{ line, token }   => write!(f, "Line {}: unable to parse '{}' as a number", line, token),
			DumpErr::Empty                       => write!(f, "Dump file contains no records"),
		}
	}

}

impl std::error::Error for DumpErr {}
