use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "anniconecta-kanban")]
#[command(version)]
#[command(about = "Inspect AnnIConecta kanban boards and replay board scripts")]
#[command(long_about = "
anniconecta-kanban loads a seed board (the built-in demo board unless a seed
file is given) and either prints it or replays a script of board commands
against it: drag start/over/end events, task additions, edits and deletions.

Settings are read from anniconecta-kanban.yaml in the working directory,
then ANNICONECTA_* environment variables, then command-line flags.
")]
pub struct Cli {
    /// Configuration file (defaults to ./anniconecta-kanban.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed board file (YAML or JSON)
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Actor recorded in the activity log
    #[arg(long, global = true)]
    pub actor: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable trace logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the seed board
    Show,
    /// Replay a YAML or JSON list of board commands and print the final board
    Replay {
        /// Script file
        script: PathBuf,
        /// Include the activity log in the output
        #[arg(long)]
        activity: bool,
    },
}
