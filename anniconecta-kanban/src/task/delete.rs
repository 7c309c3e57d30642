//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remove a task from the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let column = ctx
            .store()
            .find_task_owner(&self.id)
            .map(|loc| loc.column.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;
        let task = ctx.delete_task(&self.id)?;
        Ok(Outcome::Changed(serde_json::json!({
            "deleted": true,
            "id": task.id,
            "column": column,
        })))
    }
}

impl Operation for DeleteTask {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Delete a task"
    }
}

impl Execute<BoardContext, BoardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
