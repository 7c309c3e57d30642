//! DragEnd command

use super::move_response;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::DragItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The pointer was released. `over` is absent when the drop landed outside
/// any target, which cancels the drag.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DragEnd {
    pub active: DragItem,
    #[serde(default)]
    pub over: Option<DragItem>,
}

impl DragEnd {
    pub fn new(active: DragItem, over: Option<DragItem>) -> Self {
        Self { active, over }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let moved = ctx.on_drag_end(&self.active, self.over.as_ref());
        let value = move_response(ctx, &self.active, moved.as_ref());
        Ok(match moved {
            Some(_) => Outcome::Changed(value),
            None => Outcome::Unchanged(value),
        })
    }
}

impl Operation for DragEnd {
    fn verb(&self) -> &'static str {
        "end"
    }

    fn noun(&self) -> &'static str {
        "drag"
    }

    fn description(&self) -> &'static str {
        "Finish a drag, settling the final order"
    }
}

impl Execute<BoardContext, BoardError> for DragEnd {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
