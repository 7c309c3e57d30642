//! DragStart command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::DragItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A drag gesture began on a task card or a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DragStart {
    pub active: DragItem,
}

impl DragStart {
    pub fn new(active: DragItem) -> Self {
        Self { active }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let started = ctx.on_drag_start(&self.active);
        Ok(Outcome::Unchanged(serde_json::json!({
            "active": self.active,
            "dragging": started,
            "task": ctx.active_task(),
        })))
    }
}

impl Operation for DragStart {
    fn verb(&self) -> &'static str {
        "start"
    }

    fn noun(&self) -> &'static str {
        "drag"
    }

    fn description(&self) -> &'static str {
        "Begin dragging a task"
    }
}

impl Execute<BoardContext, BoardError> for DragStart {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
