//! CLI module - argument parsing and interactive prompts

mod args;
mod prompts;

pub use args::{Cli, Commands, InterestArgs, ProfileArgs, MAX_PRECISION};
pub use prompts::*;
