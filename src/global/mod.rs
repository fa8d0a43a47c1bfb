mod cli;
mod config;

pub use cli::Cli;
pub use config::{GlobalConfig, CONFIG, CONFIG_DIR};
