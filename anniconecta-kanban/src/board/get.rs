//! GetBoard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read the whole board: columns, per-column counts and the dragged task
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GetBoard {
    /// Also return up to this many activity entries, newest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<usize>,
}

impl GetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity(mut self, limit: usize) -> Self {
        self.activity = Some(limit);
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let mut value = serde_json::to_value(ctx.snapshot())?;
        if let Some(limit) = self.activity {
            value["activity"] = serde_json::to_value(ctx.read_activity(Some(limit)))?;
        }
        Ok(Outcome::Unchanged(value))
    }
}

impl Operation for GetBoard {
    fn verb(&self) -> &'static str {
        "get"
    }

    fn noun(&self) -> &'static str {
        "board"
    }

    fn description(&self) -> &'static str {
        "Get the board with its columns and task counts"
    }
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
