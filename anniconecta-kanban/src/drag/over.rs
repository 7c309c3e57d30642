//! DragOver command

use super::move_response;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::DragItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The pointer moved over a task or column mid-drag
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DragOver {
    pub active: DragItem,
    #[serde(default)]
    pub over: Option<DragItem>,
}

impl DragOver {
    pub fn new(active: DragItem, over: Option<DragItem>) -> Self {
        Self { active, over }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let moved = ctx.on_drag_over(&self.active, self.over.as_ref());
        let value = move_response(ctx, &self.active, moved.as_ref());
        Ok(match moved {
            Some(_) => Outcome::Changed(value),
            None => Outcome::Unchanged(value),
        })
    }
}

impl Operation for DragOver {
    fn verb(&self) -> &'static str {
        "over"
    }

    fn noun(&self) -> &'static str {
        "drag"
    }

    fn description(&self) -> &'static str {
        "Reconcile the board while a task is dragged over a target"
    }
}

impl Execute<BoardContext, BoardError> for DragOver {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, ColumnId, Task};

    #[test]
    fn test_drag_over_logs_only_when_board_changes() {
        let mut ctx = BoardContext::from_columns(vec![
            Column::new(ColumnId::Todo)
                .with_tasks(vec![Task::with_id("a", "A"), Task::with_id("b", "B")]),
            Column::new(ColumnId::Done),
        ])
        .unwrap();
        ctx.on_drag_start(&DragItem::task("a"));

        let over_self = DragOver::new(DragItem::task("a"), Some(DragItem::task("a")));
        assert!(!over_self.execute(&mut ctx).should_log());

        let over_done = DragOver::new(DragItem::task("a"), Some(DragItem::column(ColumnId::Done)));
        let result = over_done.execute(&mut ctx);
        assert!(result.should_log());
        let value = result.into_result().unwrap();
        assert_eq!(value["moved"]["type"], "relocate");
        assert_eq!(value["moved"]["to_column"], "done");
        assert_eq!(value["dragging"], true);

        // Repeated ticks over the same target settle to no-ops
        assert!(!over_done.execute(&mut ctx).should_log());
    }
}
