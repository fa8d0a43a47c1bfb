use clap::Parser;
use eyre::Result;
use log::debug;
use std::io::{self, BufRead, Write};

use crate::convert::{convert, NumberBase};
use crate::functions::read_line_lossy;
use crate::global::CONFIG;
use crate::output::{OutputFormat, Renderer};

/// Defines the CLI structure for the `convert` command.
///
/// Converts a value written in one number system into all four. When no
/// value is given, every line of standard input is converted as it arrives.
/// A value that cannot be converted is printed as `Invalid` in every field;
/// it is a displayable result, not a command failure.
#[derive(Parser)]
#[command(name = "Convert", about = "Convert a number between binary, decimal, hex and octal")]
pub struct Cli {
	/// Value to convert (reads lines from stdin when omitted)
	#[arg(required = false)]
	pub value: Option<String>,

	/// Number system of the input
	#[arg(long, short, value_enum)]
	pub from: Option<NumberBase>,

	/// Output format
	#[arg(long, short, value_enum)]
	pub output: Option<OutputFormat>,

	/// Disable colored output
	#[arg(long)]
	pub no_color: bool,
}

impl Cli {
	pub fn run(&self) -> Result<()> {
		let base = self.from.unwrap_or(CONFIG.default_base);
		let renderer = Renderer::new(
			self.output.unwrap_or(CONFIG.output),
			CONFIG.color && !self.no_color,
		);

		let stdout = io::stdout();
		let mut out = stdout.lock();
		match &self.value {
			Some(value) => {
				writeln!(out, "{}", renderer.results(&convert(value, base).display())?)?;
				Ok(())
			}
			None => {
				let stdin = io::stdin();
				convert_lines(stdin.lock(), &mut out, base, &renderer)
			}
		}
	}
}

/// Converts each line of `reader` and writes its result before reading the next.
pub fn convert_lines<R, W>(mut reader: R, out: &mut W, base: NumberBase, renderer: &Renderer) -> Result<()>
where
	R: BufRead,
	W: Write,
{
	let mut count = 0usize;
	while let Some(line) = read_line_lossy(&mut reader)? {
		if count > 0 && renderer.format != OutputFormat::Json {
			writeln!(out)?;
		}
		writeln!(out, "{}", renderer.results(&convert(&line, base).display())?)?;
		out.flush()?;
		count += 1;
	}
	debug!("converted {} line(s) from {}", count, base);
	Ok(())
}
