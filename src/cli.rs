
use clap::Parser;
use clap::Subcommand;
use crate::convert;
use crate::form;
use crate::global;
use crate::global::CONFIG;
use crate::output::{OutputFormat, Renderer};
use eyre::Result;

#[derive(Parser)]
#[command(name = "radix-tools", version, about = "Convert numbers between binary, decimal, hexadecimal and octal", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value into all four number systems
    #[command(visible_alias = "c")]
    Convert(convert::Cli),
    /// Interactive converter reading one input per line
    Session(form::Cli),
    /// List the number systems and the digits they use
    Bases {
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Show or change saved settings
    Config(global::Cli),
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cli) => cli.run(),
            Commands::Session(cli) => cli.run(),
            Commands::Config(cli)  => cli.run(),
            Commands::Bases { output } => {
                let renderer = Renderer::new(output.unwrap_or(CONFIG.output), CONFIG.color);
                println!("{}", renderer.reference()?);
                Ok(())
            }
        }
    }
}
