use eyre::{Result, WrapErr};
use std::io::BufRead;

/// Reads one line from `reader`, stripping the line terminator.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so one
/// garbled line does not end a stream. Returns `None` at end of input.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
	let mut buf = Vec::new();
	let read = reader
		.read_until(b'\n', &mut buf)
		.wrap_err("Failed to read input line")?;
	if read == 0 {
		return Ok(None);
	}

	if buf.last() == Some(&b'\n') {
		buf.pop();
		if buf.last() == Some(&b'\r') {
			buf.pop();
		}
	}
	Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Parses the boolean spellings accepted on the command line and in the
/// environment: `true/false`, `yes/no`, `on/off`, `y/n`, `t/f`, `1/0`.
pub fn parse_boolish(value: &str) -> Result<bool, String> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
		"false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
		other => Err(format!("'{}' is not a boolean (expected true/false, yes/no, on/off or 1/0)", other)),
	}
}
