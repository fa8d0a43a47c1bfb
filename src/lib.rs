//! Converts numbers between binary, decimal, hexadecimal and octal.
//!
//! The conversion engine in [`convert`] is a pure function of the input text
//! and the selected number system. [`form::ConverterState`] is the state a
//! front end keeps around it; the `radix-tools` binary drives both from the
//! command line.

pub mod cli;
pub mod convert;
pub mod form;
pub mod functions;
pub mod global;
pub mod output;
