//! Command-line host for the AnnIConecta kanban board
//!
//! Loads a seed board, replays scripted board commands through the
//! operation processor and prints the result. Useful for checking seed files
//! and reproducing drag sequences outside the UI.

pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod run;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::{CliConfig, ConfigError};
