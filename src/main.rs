use clap::Parser;
use eyre::Result;
use log::info;

fn main() -> Result<()> {
    // Initialize the logger
    pretty_env_logger::init();

    info!("Application started");

    radix_tools::cli::Cli::parse().run()
}
