use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use super::NumberBase;

/// Marker shown in every output field when the input cannot be converted.
pub const INVALID_MARKER: &str = "Invalid";

/// Why an input string was rejected.
///
/// `convert` folds both variants into [`ConversionResult::Invalid`]; the
/// reason is only kept for callers of [`parse`] and for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("input contains characters outside the {0} digit set")]
    InvalidDigits(NumberBase),
    #[error("value does not fit in 128 bits")]
    Overflow,
}

/// Outcome of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionResult {
    /// Blank input. Not an error: nothing has been entered yet.
    Empty,
    Valid(u128),
    Invalid,
}

impl ConversionResult {
    /// The magnitude this result stands for. Blank input counts as zero.
    pub fn magnitude(&self) -> Option<u128> {
        match self {
            ConversionResult::Empty => Some(0),
            ConversionResult::Valid(value) => Some(*value),
            ConversionResult::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ConversionResult::Invalid)
    }

    /// Builds the four strings shown to the user.
    pub fn display(&self) -> DisplaySet {
        match self.magnitude() {
            Some(value) => DisplaySet::of(value),
            None => DisplaySet::invalid(),
        }
    }
}

/// The four simultaneous renderings of one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySet {
    pub binary: String,
    pub decimal: String,
    pub hex: String,
    pub octal: String,
}

impl DisplaySet {
    pub fn of(magnitude: u128) -> Self {
        Self {
            binary: format(magnitude, NumberBase::Binary),
            decimal: format(magnitude, NumberBase::Decimal),
            hex: format(magnitude, NumberBase::Hexadecimal),
            octal: format(magnitude, NumberBase::Octal),
        }
    }

    pub fn zero() -> Self {
        Self::of(0)
    }

    pub fn invalid() -> Self {
        Self {
            binary: INVALID_MARKER.to_string(),
            decimal: INVALID_MARKER.to_string(),
            hex: INVALID_MARKER.to_string(),
            octal: INVALID_MARKER.to_string(),
        }
    }

    pub fn get(&self, base: NumberBase) -> &str {
        match base {
            NumberBase::Binary => &self.binary,
            NumberBase::Decimal => &self.decimal,
            NumberBase::Hexadecimal => &self.hex,
            NumberBase::Octal => &self.octal,
        }
    }

    pub fn is_invalid(&self) -> bool {
        NumberBase::ALL.iter().all(|base| self.get(*base) == INVALID_MARKER)
    }
}

impl Default for DisplaySet {
    fn default() -> Self {
        Self::zero()
    }
}

/// Whitespace plus the byte order mark, which pasted text often carries.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Validates and parses `text` as an unsigned integer written in `base`.
///
/// Leading and trailing whitespace and byte order marks are ignored. Blank
/// input yields `Ok(None)`.
/// Anything else must be one or more digits of `base`: no sign, no `0x`/`0b`
/// prefix, no separators.
pub fn parse(text: &str, base: NumberBase) -> Result<Option<u128>, ConversionError> {
    let trimmed = text.trim_matches(is_blank);
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !base.accepts(trimmed) {
        return Err(ConversionError::InvalidDigits(base));
    }

    // Digits are already validated, so the only remaining failure is overflow.
    u128::from_str_radix(trimmed, base.radix())
        .map(Some)
        .map_err(|_| ConversionError::Overflow)
}

/// Converts `text`, entered in `base`, into a [`ConversionResult`].
pub fn convert(text: &str, base: NumberBase) -> ConversionResult {
    match parse(text, base) {
        Ok(None) => {
            trace!("blank {} input", base);
            ConversionResult::Empty
        }
        Ok(Some(value)) => {
            trace!("{:?} ({}) -> {}", text.trim_matches(is_blank), base, value);
            ConversionResult::Valid(value)
        }
        Err(err) => {
            debug!("rejected {:?} as {}: {}", text, base, err);
            ConversionResult::Invalid
        }
    }
}

/// Renders `magnitude` as digits of `target`, without prefix or padding.
/// Hex letters are uppercase.
pub fn format(magnitude: u128, target: NumberBase) -> String {
    match target {
        NumberBase::Binary => format!("{:b}", magnitude),
        NumberBase::Decimal => magnitude.to_string(),
        NumberBase::Hexadecimal => format!("{:X}", magnitude),
        NumberBase::Octal => format!("{:o}", magnitude),
    }
}
