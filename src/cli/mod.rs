// mod.rs - CLI module

pub mod args;
pub mod commands;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, Command};
pub use commands::{command_list, run_command, CommandInfo, COMMANDS};
pub use config::Config;
pub use validation::{validate_args, ValidationResult};
