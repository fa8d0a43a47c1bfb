use clap::Parser;
use eyre::{eyre, Result};
use log::info;
use std::io::{self, BufRead, Write};

use crate::convert::NumberBase;
use crate::form::ConverterState;
use crate::functions::read_line_lossy;
use crate::global::CONFIG;
use crate::output::{OutputFormat, Renderer};

const HELP: &str = "\
Type a number to convert it. Commands:
  :base <binary|decimal|hex|octal>  switch number system (clears the input)
  :clear                            clear the input
  :help                             show this help
  :quit                             leave the session";

/// CLI structure for the `session` command.
///
/// A line-oriented converter form: every line read from stdin replaces the
/// input text and the four outputs are printed again.
#[derive(Parser)]
#[command(name = "Session", about = "Interactive converter, recomputing on every input line")]
pub struct Cli {
	/// Initial number system
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
		let mut state = ConverterState::new(self.from.unwrap_or(CONFIG.default_base));
		let renderer = Renderer::new(
			self.output.unwrap_or(CONFIG.output),
			CONFIG.color && !self.no_color,
		);

		info!("session started in {}", state.base());
		let stdin = io::stdin();
		let stdout = io::stdout();
		run_session(&mut state, stdin.lock(), &mut stdout.lock(), &renderer)
	}
}

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	Input(String),
	Base(NumberBase),
	Clear,
	Help,
	Quit,
}

/// Lines starting with `:` are commands; anything else is input text.
pub fn parse_line(line: &str) -> Result<Action> {
	let Some(command) = line.trim_start().strip_prefix(':') else {
		return Ok(Action::Input(line.to_string()));
	};

	let mut parts = command.split_whitespace();
	match parts.next() {
		Some("base") | Some("b") => {
			let name = parts
				.next()
				.ok_or_else(|| eyre!("Usage: :base <binary|decimal|hex|octal>"))?;
			Ok(Action::Base(name.parse()?))
		}
		Some("clear") | Some("c") => Ok(Action::Clear),
		Some("help") | Some("h") => Ok(Action::Help),
		Some("quit") | Some("q") => Ok(Action::Quit),
		Some(other) => Err(eyre!("Unknown command ':{}' (try :help)", other)),
		None => Err(eyre!("Empty command (try :help)")),
	}
}

fn write_header<W: Write>(out: &mut W, state: &ConverterState) -> Result<()> {
	writeln!(out, "{} | {}", state.base().label(), state.placeholder())?;
	Ok(())
}

fn write_outputs<W: Write>(out: &mut W, state: &ConverterState, renderer: &Renderer) -> Result<()> {
	writeln!(out, "{}", renderer.results(state.outputs())?)?;
	Ok(())
}

/// Drives `state` from `reader` until end of input or `:quit`.
pub fn run_session<R, W>(
	state: &mut ConverterState,
	mut reader: R,
	out: &mut W,
	renderer: &Renderer,
) -> Result<()>
where
	R: BufRead,
	W: Write,
{
	write_header(out, state)?;

	while let Some(line) = read_line_lossy(&mut reader)? {
		match parse_line(&line) {
			Ok(Action::Input(text)) => {
				state.set_input(text);
				write_outputs(out, state, renderer)?;
			}
			Ok(Action::Base(base)) => {
				state.set_base(base);
				write_header(out, state)?;
				write_outputs(out, state, renderer)?;
			}
			Ok(Action::Clear) => {
				state.clear();
				write_outputs(out, state, renderer)?;
			}
			Ok(Action::Help) => writeln!(out, "{}", HELP)?,
			Ok(Action::Quit) => break,
			Err(e) => writeln!(out, "{}", e)?,
		}
		out.flush()?;
	}

	Ok(())
}
