//! GetTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read a task with its column, position and progress
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetTask {
    pub id: TaskId,
}

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let loc = ctx
            .store()
            .find_task_owner(&self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        let mut value = serde_json::to_value(loc.task)?;
        value["column"] = serde_json::to_value(loc.column.id)?;
        value["index"] = loc.index.into();
        value["progress"] = loc.task.progress().into();
        Ok(Outcome::Unchanged(value))
    }
}

impl Operation for GetTask {
    fn verb(&self) -> &'static str {
        "get"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Get a task by ID"
    }
}

impl Execute<BoardContext, BoardError> for GetTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
