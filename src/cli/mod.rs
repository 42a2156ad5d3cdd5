//! CLI argument parsing for strate-tui.

mod args;

pub use args::{parse_args, CliConfig};
