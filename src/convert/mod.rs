mod base;
mod cli;
mod engine;

pub use base::NumberBase;
pub use cli::Cli;
pub use engine::{
	convert,
	format,
	parse,
	ConversionError,
	ConversionResult,
	DisplaySet,
	INVALID_MARKER,
};
