//! Drag session tracking.
//!
//! Ephemeral interaction state that never belongs in the board itself: which
//! task, if any, is under the pointer right now. The host reads it to render
//! the drag overlay.

use crate::types::{DragItem, TaskId};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "task", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(TaskId),
}

impl DragSession {
    /// Enter the dragging state. Only task cards start a session; a column
    /// payload leaves the tracker as it was.
    pub fn start(&mut self, item: &DragItem) -> bool {
        match item {
            DragItem::Task(id) => {
                trace!(task = %id, "drag session started");
                *self = Self::Dragging(id.clone());
                true
            }
            DragItem::Column(_) => false,
        }
    }

    /// Return to idle, handing back the task that was being dragged
    pub fn end(&mut self) -> Option<TaskId> {
        match std::mem::take(self) {
            Self::Dragging(id) => {
                trace!(task = %id, "drag session ended");
                Some(id)
            }
            Self::Idle => None,
        }
    }

    pub fn active_task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Dragging(id) => Some(id),
            Self::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
