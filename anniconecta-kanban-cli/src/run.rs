//! Command execution

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::CliConfig;
use crate::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use anniconecta_kanban::{
    board::GetBoard, BoardCommand, BoardContext, BoardOperationProcessor, BoardSeed,
    OperationProcessor,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

/// Fold command-line overrides into the loaded configuration
pub fn resolve_config(cli: &Cli) -> Result<CliConfig> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(seed) = &cli.seed {
        config.seed = Some(seed.clone());
    }
    if let Some(actor) = &cli.actor {
        config.actor = Some(actor.clone());
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    Ok(config)
}

pub fn load_seed(path: Option<&Path>) -> Result<BoardSeed> {
    match path {
        Some(path) => BoardSeed::load(path)
            .with_context(|| format!("failed to load seed board {}", path.display())),
        None => BoardSeed::builtin().context("built-in seed board is invalid"),
    }
}

/// Run a parsed command line, returning the process exit code
pub fn run(cli: &Cli) -> Result<i32> {
    let config = resolve_config(cli)?;
    let mut ctx = BoardContext::new(load_seed(config.seed.as_deref())?)?;
    let processor = match &config.actor {
        Some(actor) => BoardOperationProcessor::with_actor(actor.as_str()),
        None => BoardOperationProcessor::new(),
    };

    match &cli.command {
        Commands::Show => {
            let board = processor.process(&GetBoard::new(), &mut ctx)?;
            print_value(&board, config.format)?;
            Ok(EXIT_SUCCESS)
        }
        Commands::Replay { script, activity } => {
            let content = std::fs::read_to_string(script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let steps = BoardCommand::parse_script(&content)
                .with_context(|| format!("failed to parse script {}", script.display()))?;

            let failures = replay(&processor, &mut ctx, &steps);

            let mut query = GetBoard::new();
            if *activity {
                query = query.with_activity(anniconecta_kanban::ACTIVITY_LIMIT);
            }
            let board = processor.process(&query, &mut ctx)?;
            print_value(&board, config.format)?;

            if failures > 0 {
                warn!(failures, steps = steps.len(), "replay finished with failed steps");
                Ok(EXIT_WARNING)
            } else {
                Ok(EXIT_SUCCESS)
            }
        }
    }
}

/// Apply every step in order, reporting failures and carrying on. Returns
/// the number of failed steps.
pub fn replay(
    processor: &BoardOperationProcessor,
    ctx: &mut BoardContext,
    steps: &[BoardCommand],
) -> usize {
    let mut failures = 0;
    for (index, step) in steps.iter().enumerate() {
        let op = step.operation().op_string();
        match processor.process_command(step, ctx) {
            Ok(_) => info!(step = index + 1, op = %op, revision = ctx.revision(), "applied"),
            Err(e) => {
                failures += 1;
                eprintln!("step {} ({op}) failed: {e}", index + 1);
            }
        }
    }
    failures
}

fn print_value<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    write_value(&mut std::io::stdout().lock(), value, format)
}

/// Render a value to `out`. A reader that went away (`| head`) is not an
/// error.
pub fn write_value<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    format: OutputFormat,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    match writeln!(out, "{rendered}").and_then(|()| out.flush()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anniconecta_kanban::ColumnId;
    use clap::Parser;

    #[test]
    fn test_replay_counts_failures_and_continues() {
        let mut ctx = BoardContext::new(BoardSeed::builtin().unwrap()).unwrap();
        let processor = BoardOperationProcessor::new();
        let steps = BoardCommand::parse_script(
            r#"
- op: delete_task
  id: no-such-task
- op: add_task
  title: Register new volunteers
  column: blocked
"#,
        )
        .unwrap();

        assert_eq!(replay(&processor, &mut ctx, &steps), 1);
        assert_eq!(ctx.task_count(ColumnId::Blocked), Some(1));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_value_tolerates_closed_pipe() {
        let board = serde_json::json!({"revision": 0});
        assert!(write_value(&mut ClosedPipe, &board, OutputFormat::Json).is_ok());

        let mut out = Vec::new();
        write_value(&mut out, &board, OutputFormat::Yaml).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "revision: 0\n\n");
    }

    #[test]
    fn test_flags_override_env_and_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                crate::config::CONFIG_FILE_NAME,
                "format: yaml\nactor: maria\nseed: boards/ngo.yaml\n",
            )?;
            jail.set_env("ANNICONECTA_FORMAT", "yaml");
            jail.set_env("ANNICONECTA_ACTOR", "joao");

            let cli = Cli::try_parse_from(["anniconecta-kanban", "--format", "json", "show"])
                .map_err(|e| e.to_string())?;
            let config = resolve_config(&cli).map_err(|e| e.to_string())?;

            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(config.actor.as_deref(), Some("joao"));
            assert_eq!(config.seed, Some(std::path::PathBuf::from("boards/ngo.yaml")));
            Ok(())
        });
    }

    #[test]
    fn test_load_builtin_seed() {
        let seed = load_seed(None).unwrap();
        assert_eq!(seed.columns().len(), 6);
    }
}
