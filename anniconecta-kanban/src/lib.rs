//! Kanban board engine with drag-and-drop move reconciliation
//!
//! This crate holds the task board behind AnnIConecta's project pages: a
//! fixed set of workflow columns, each with an ordered list of tasks, and
//! the logic that turns pointer drag events into new board states.
//!
//! ## Overview
//!
//! - **Board state store** - ordered columns and tasks, replaced atomically
//!   on every change ([`BoardStore`])
//! - **Drag session** - which task is being dragged, for the overlay
//!   ([`DragSession`])
//! - **Move reconciler** - a pure function from (board, drag event) to the
//!   next board ([`reconcile`])
//! - **Commands** - host-facing operations with an activity log
//!   ([`BoardOperationProcessor`])
//!
//! ## Basic Usage
//!
//! ```rust
//! use anniconecta_kanban::{
//!     drag::{DragEnd, DragOver, DragStart},
//!     BoardContext, BoardOperationProcessor, BoardSeed, ColumnId, DragItem,
//!     OperationProcessor,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ctx = BoardContext::new(BoardSeed::builtin()?)?;
//! let processor = BoardOperationProcessor::with_actor("coordinator");
//!
//! let card = DragItem::task("task-room-booking");
//! let target = Some(DragItem::column(ColumnId::InProgress));
//! processor.process(&DragStart::new(card.clone()), &mut ctx)?;
//! processor.process(&DragOver::new(card.clone(), target.clone()), &mut ctx)?;
//! processor.process(&DragEnd::new(card, target), &mut ctx)?;
//!
//! assert_eq!(ctx.task_count(ColumnId::InProgress), Some(2));
//! # Ok(())
//! # }
//! ```

mod command;
mod context;
mod error;
mod operation;
mod processor;
pub mod reconcile;
pub mod seed;
mod session;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod drag;
pub mod task;

pub use command::BoardCommand;
pub use context::{BoardContext, BoardSnapshot, ColumnCount, ACTIVITY_LIMIT};
pub use error::{BoardError, Result};
pub use operation::{Execute, ExecutionResult, Operation, OperationProcessor};
pub use processor::BoardOperationProcessor;
pub use reconcile::{move_across_columns, move_within_column, reconcile, MoveKind, PlannedMove};
pub use seed::BoardSeed;
pub use session::DragSession;
pub use store::{BoardStore, TaskLocation};

// Re-export commonly used types
pub use types::{
    Column, ColumnId, DragItem, DragKind, LogEntry, LogEntryId, Priority, Subtask, SubtaskId,
    Task, TaskId,
};
