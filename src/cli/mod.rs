//! CLI argument parsing for Zen TUI.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
