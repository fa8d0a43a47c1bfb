use clap::ValueEnum;
use eyre::{eyre, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref BINARY_DIGITS: Regex = Regex::new(r"^[01]+$").expect("binary digit class");
    static ref DECIMAL_DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("decimal digit class");
    static ref HEX_DIGITS: Regex = Regex::new(r"^[0-9a-fA-F]+$").expect("hex digit class");
    static ref OCTAL_DIGITS: Regex = Regex::new(r"^[0-7]+$").expect("octal digit class");
}

/// One of the four supported positional number systems.
///
/// A `NumberBase` carries no state of its own. It only selects the radix, the
/// digit class used to validate input, and the informational strings shown
/// next to an input or result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    #[value(name = "binary", aliases = ["bin", "b"])]
    Binary,
    #[value(name = "decimal", aliases = ["dec", "d"])]
    Decimal,
    #[value(name = "hex", aliases = ["hexadecimal", "x"])]
    #[serde(rename = "hex", alias = "hexadecimal")]
    Hexadecimal,
    #[value(name = "octal", aliases = ["oct", "o"])]
    Octal,
}

impl NumberBase {
    /// Display order used by every renderer.
    pub const ALL: [NumberBase; 4] = [
        NumberBase::Binary,
        NumberBase::Decimal,
        NumberBase::Hexadecimal,
        NumberBase::Octal,
    ];

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
            NumberBase::Octal => 8,
        }
    }

    /// Short identifier, also the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            NumberBase::Binary => "binary",
            NumberBase::Decimal => "decimal",
            NumberBase::Hexadecimal => "hex",
            NumberBase::Octal => "octal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumberBase::Binary => "Binary (Base 2)",
            NumberBase::Decimal => "Decimal (Base 10)",
            NumberBase::Hexadecimal => "Hexadecimal (Base 16)",
            NumberBase::Octal => "Octal (Base 8)",
        }
    }

    /// Hint shown while the input is still empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            NumberBase::Binary => "Enter binary (0-1)",
            NumberBase::Decimal => "Enter decimal (0-9)",
            NumberBase::Hexadecimal => "Enter hex (0-9, A-F)",
            NumberBase::Octal => "Enter octal (0-7)",
        }
    }

    /// Digit set as listed in the reference block.
    pub fn digits(self) -> &'static str {
        match self {
            NumberBase::Binary => "0, 1",
            NumberBase::Decimal => "0-9",
            NumberBase::Hexadecimal => "0-9, A-F",
            NumberBase::Octal => "0-7",
        }
    }

    /// Returns true when `text` is one or more digits of this base and nothing else.
    pub fn accepts(self, text: &str) -> bool {
        let class: &Regex = match self {
            NumberBase::Binary => &BINARY_DIGITS,
            NumberBase::Decimal => &DECIMAL_DIGITS,
            NumberBase::Hexadecimal => &HEX_DIGITS,
            NumberBase::Octal => &OCTAL_DIGITS,
        };
        class.is_match(text)
    }
}

impl Default for NumberBase {
    fn default() -> Self {
        NumberBase::Decimal
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumberBase {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "b" => Ok(NumberBase::Binary),
            "decimal" | "dec" | "d" => Ok(NumberBase::Decimal),
            "hex" | "hexadecimal" | "x" => Ok(NumberBase::Hexadecimal),
            "octal" | "oct" | "o" => Ok(NumberBase::Octal),
            other => Err(eyre!(
                "Unknown number system '{}' (expected binary, decimal, hex or octal)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_matches_base() {
        let radixes: Vec<u32> = NumberBase::ALL.iter().map(|b| b.radix()).collect();
        assert_eq!(radixes, vec![2, 10, 16, 8]);
    }

    #[test]
    fn digit_classes() {
        assert!(NumberBase::Binary.accepts("0101"));
        assert!(!NumberBase::Binary.accepts("012"));
        assert!(NumberBase::Decimal.accepts("0123456789"));
        assert!(!NumberBase::Decimal.accepts("12a"));
        assert!(NumberBase::Hexadecimal.accepts("DeadBeef09"));
        assert!(!NumberBase::Hexadecimal.accepts("0xff"));
        assert!(NumberBase::Octal.accepts("01234567"));
        assert!(!NumberBase::Octal.accepts("8"));
    }

    #[test]
    fn digit_classes_reject_empty_and_signs() {
        for base in NumberBase::ALL {
            assert!(!base.accepts(""));
            assert!(!base.accepts("-1"));
            assert!(!base.accepts("1 0"));
            assert!(!base.accepts("1.0"));
        }
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("bin".parse::<NumberBase>().unwrap(), NumberBase::Binary);
        assert_eq!("Decimal".parse::<NumberBase>().unwrap(), NumberBase::Decimal);
        assert_eq!("HEXADECIMAL".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
        assert_eq!(" oct ".parse::<NumberBase>().unwrap(), NumberBase::Octal);
        assert!("base64".parse::<NumberBase>().is_err());
    }

    #[test]
    fn serializes_with_short_names() {
        let json = serde_json::to_string(&NumberBase::ALL).unwrap();
        assert_eq!(json, r#"["binary","decimal","hex","octal"]"#);
        let parsed: NumberBase = serde_json::from_str(r#""hexadecimal""#).unwrap();
        assert_eq!(parsed, NumberBase::Hexadecimal);
    }

    #[test]
    fn placeholders() {
        assert_eq!(NumberBase::Hexadecimal.placeholder(), "Enter hex (0-9, A-F)");
        assert_eq!(NumberBase::default(), NumberBase::Decimal);
    }
}
