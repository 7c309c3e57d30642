//! Operation processor: executes board commands and records their activity

use crate::command::BoardCommand;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::operation::{Execute, OperationProcessor};
use serde_json::Value;
use tracing::{debug, warn};

/// Executes commands against a [`BoardContext`], attributing logged
/// entries to an optional actor.
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute activity to an actor, e.g. "maria" or "agent[session]"
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Process any [`BoardCommand`]
    pub fn process_command(
        &self,
        command: &BoardCommand,
        ctx: &mut BoardContext,
    ) -> Result<Value, BoardError> {
        match command {
            BoardCommand::AddTask(op) => self.process(op, ctx),
            BoardCommand::UpdateTask(op) => self.process(op, ctx),
            BoardCommand::DeleteTask(op) => self.process(op, ctx),
            BoardCommand::GetTask(op) => self.process(op, ctx),
            BoardCommand::GetBoard(op) => self.process(op, ctx),
            BoardCommand::DragStart(op) => self.process(op, ctx),
            BoardCommand::DragOver(op) => self.process(op, ctx),
            BoardCommand::DragEnd(op) => self.process(op, ctx),
        }
    }
}

impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    fn process<O: Execute<BoardContext, BoardError>>(
        &self,
        op: &O,
        ctx: &mut BoardContext,
    ) -> Result<Value, BoardError> {
        let (result, log_entry) = op.execute(ctx).split();

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.as_str());
            }
            debug!(op = %entry.op, duration_ms = entry.duration_ms, "recorded activity");
            ctx.append_activity(entry);
        }
        if let Err(e) = &result {
            warn!(op = %op.op_string(), error = %e, "operation failed");
        }
        result
    }
}
