//! Drag payloads exchanged with the pointer-tracking layer

use super::column::ColumnId;
use super::ids::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The element under a drag gesture: either a task card or a column body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DragItem {
    Task(TaskId),
    Column(ColumnId),
}

impl DragItem {
    pub fn task(id: impl Into<TaskId>) -> Self {
        Self::Task(id.into())
    }

    pub fn column(id: ColumnId) -> Self {
        Self::Column(id)
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Task(_) => DragKind::Task,
            Self::Column(_) => DragKind::Column,
        }
    }

    pub fn as_task(&self) -> Option<&TaskId> {
        match self {
            Self::Task(id) => Some(id),
            Self::Column(_) => None,
        }
    }
}

impl fmt::Display for DragItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task:{id}"),
            Self::Column(id) => write!(f, "column:{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Task,
    Column,
}
