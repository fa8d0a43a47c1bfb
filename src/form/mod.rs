mod cli;
mod state;

pub use cli::{parse_line, run_session, Action, Cli};
pub use state::ConverterState;
