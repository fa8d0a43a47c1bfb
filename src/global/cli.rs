use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use crate::convert::NumberBase;
use crate::functions::parse_boolish;
use crate::global::{GlobalConfig, CONFIG};
use crate::output::OutputFormat;

/// Defines the CLI structure for the `config` command.
#[derive(Parser)]
#[command(name = "GlobalConfig", about = "Global Configuration Settings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the effective configuration (file plus environment overrides)
    #[command(visible_alias = "s")]
    Show,
    /// Print the path of the config file
    Path,
    /// Change a setting and save it to the config file
    Set {
        #[command(subcommand)]
        setting: Setting,
    },
}

#[derive(Debug, Subcommand)]
pub enum Setting {
    /// Number system used when --from is not given
    #[command(visible_alias = "base")]
    DefaultBase {
        #[arg(value_enum)]
        base: NumberBase,
    },
    /// Output format used when --output is not given
    Output {
        #[arg(value_enum)]
        format: OutputFormat,
    },
    /// Color the Invalid marker
    Color {
        #[arg(action = ArgAction::Set, value_parser = parse_boolish)]
        enabled: bool,
    },
}

impl Cli {
    // Method to run the CLI commands
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Command::Show => {
                print!("{}", CONFIG.to_toml()?);
                Ok(())
            }
            Command::Path => {
                println!("{}", GlobalConfig::path().display());
                Ok(())
            }
            Command::Set { setting } => {
                // Environment overrides must not leak into the saved file,
                // and an unreadable file is reported rather than replaced
                let mut config = GlobalConfig::load_from(&GlobalConfig::path())?;
                match setting {
                    Setting::DefaultBase { base } => config.default_base = *base,
                    Setting::Output { format } => config.output = *format,
                    Setting::Color { enabled } => config.color = *enabled,
                }
                config.save()?;
                print!("{}", config.to_toml()?);
                Ok(())
            }
        }
    }
}
