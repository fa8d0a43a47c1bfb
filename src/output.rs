use clap::ValueEnum;
use colored::*;
use eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::convert::{DisplaySet, NumberBase, INVALID_MARKER};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(eyre!("Unknown output format '{}' (expected table, plain or json)", other)),
        }
    }
}

#[derive(Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Number System")]
    system: &'static str,

    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Clone, Tabled)]
struct ReferenceRow {
    #[tabled(rename = "Number System")]
    system: &'static str,

    #[tabled(rename = "Radix")]
    radix: u32,

    #[tabled(rename = "Uses")]
    digits: &'static str,
}

/// Turns conversion results and the base reference block into text.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    pub format: OutputFormat,
    pub color: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    fn paint(&self, value: &str) -> String {
        if self.color && value == INVALID_MARKER {
            value.red().to_string()
        } else {
            value.to_string()
        }
    }

    /// Renders the four outputs of one conversion.
    pub fn results(&self, set: &DisplaySet) -> Result<String> {
        match self.format {
            OutputFormat::Table => {
                let rows: Vec<ResultRow> = NumberBase::ALL
                    .iter()
                    .map(|base| ResultRow {
                        system: base.label(),
                        value: self.paint(set.get(*base)),
                    })
                    .collect();

                let mut table = Table::new(rows);
                table
                    .with(Style::rounded())
                    .with(Modify::new(Columns::single(1)).with(Alignment::right()));
                Ok(table.to_string())
            }
            OutputFormat::Plain => Ok(NumberBase::ALL
                .iter()
                .map(|base| format!("{}: {}", base.label(), self.paint(set.get(*base))))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                serde_json::to_string(set).wrap_err("Failed to serialize conversion results")
            }
        }
    }

    /// Renders the informational block listing every base and its digits.
    pub fn reference(&self) -> Result<String> {
        match self.format {
            OutputFormat::Table => {
                let rows: Vec<ReferenceRow> = NumberBase::ALL
                    .iter()
                    .map(|base| ReferenceRow {
                        system: base.label(),
                        radix: base.radix(),
                        digits: base.digits(),
                    })
                    .collect();

                let mut table = Table::new(rows);
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Plain => Ok(NumberBase::ALL
                .iter()
                .map(|base| format!("{}\n  Uses: {}", base.label(), base.digits()))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let entries: Vec<_> = NumberBase::ALL
                    .iter()
                    .map(|base| {
                        json!({
                            "name": base.name(),
                            "label": base.label(),
                            "radix": base.radix(),
                            "digits": base.digits(),
                        })
                    })
                    .collect();
                serde_json::to_string_pretty(&entries).wrap_err("Failed to serialize reference block")
            }
        }
    }
}
