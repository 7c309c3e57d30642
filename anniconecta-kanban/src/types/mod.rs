//! Core types for the board engine

mod column;
mod drag;
mod ids;
mod log;
mod task;

pub use column::{Column, ColumnId};
pub use drag::{DragItem, DragKind};
pub use ids::{LogEntryId, SubtaskId, TaskId};
pub use log::LogEntry;
pub use task::{Priority, Subtask, Task};
