//! BoardContext: one board instance as seen by its host.
//!
//! Owns the committed board state, the drag session and the activity log.
//! Each context owns its own state; hosts that share a board across pages
//! pass the context around explicitly.

use crate::error::Result;
use crate::reconcile::{reconcile, MoveKind};
use crate::seed::BoardSeed;
use crate::session::DragSession;
use crate::store::BoardStore;
use crate::types::{Column, ColumnId, DragItem, LogEntry, Task, TaskId};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Activity entries kept per board, newest first
pub const ACTIVITY_LIMIT: usize = 500;

#[derive(Debug)]
pub struct BoardContext {
    store: BoardStore,
    session: DragSession,
    activity: VecDeque<LogEntry>,
}

/// Serializable read view of the board for rendering
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub revision: u64,
    pub columns: Arc<Vec<Column>>,
    pub counts: Vec<ColumnCount>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_task: Option<Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    pub column: ColumnId,
    pub count: usize,
}

impl BoardContext {
    /// Create a context owning the given seed board
    pub fn new(seed: BoardSeed) -> Result<Self> {
        Self::from_columns(seed.into_columns())
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        Ok(Self {
            store: BoardStore::new(columns)?,
            session: DragSession::default(),
            activity: VecDeque::new(),
        })
    }

    /// Record the start of a drag. Only task cards start a session.
    pub fn on_drag_start(&mut self, active: &DragItem) -> bool {
        self.session.start(active)
    }

    /// Live reconciliation while the pointer moves. Returns what moved, if
    /// anything.
    pub fn on_drag_over(&mut self, active: &DragItem, over: Option<&DragItem>) -> Option<MoveKind> {
        if !self.session.is_dragging() {
            trace!(active = %active, "drag over while idle, ignored");
            return None;
        }
        self.apply_move(active, over)
    }

    /// Final reconciliation on release. The session always returns to idle,
    /// valid drop or not.
    pub fn on_drag_end(&mut self, active: &DragItem, over: Option<&DragItem>) -> Option<MoveKind> {
        if !self.session.is_dragging() {
            trace!(active = %active, "drag end while idle, ignored");
            return None;
        }
        let moved = self.apply_move(active, over);
        self.session.end();
        moved
    }

    fn apply_move(&mut self, active: &DragItem, over: Option<&DragItem>) -> Option<MoveKind> {
        let active_id = active.as_task()?;
        if self.session.active_task_id() != Some(active_id) {
            trace!(active = %active, session = ?self.session, "not the dragged task, ignored");
            return None;
        }
        let planned = reconcile(self.store.columns(), active_id, over)?;

        match self.store.commit(planned.columns) {
            Ok(()) => {
                debug!(task = %active_id, revision = self.store.revision(), moved = ?planned.kind, "reconciled drag");
                Some(planned.kind)
            }
            Err(e) => {
                error!(task = %active_id, error = %e, "reconciler produced an invalid board");
                None
            }
        }
    }

    /// Edit a task's content in place; never reorders
    pub fn update_task(&mut self, task: Task) -> Result<()> {
        self.store.replace_task(task)
    }

    /// Append a task to a column
    pub fn add_task(&mut self, column: ColumnId, task: Task) -> Result<()> {
        self.store.add_task(column, task)
    }

    pub fn delete_task(&mut self, id: &TaskId) -> Result<Task> {
        self.store.delete_task(id)
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn columns(&self) -> &Arc<Vec<Column>> {
        self.store.columns()
    }

    pub fn task_count(&self, column: ColumnId) -> Option<usize> {
        self.store.task_count(column)
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The task being dragged, for overlay rendering
    pub fn active_task(&self) -> Option<&Task> {
        self.session
            .active_task_id()
            .and_then(|id| self.store.find_task(id))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let columns = self.store.columns().clone();
        let counts = columns
            .iter()
            .map(|c| ColumnCount {
                column: c.id,
                count: c.len(),
            })
            .collect();
        BoardSnapshot {
            revision: self.store.revision(),
            total: self.store.task_total(),
            columns,
            counts,
            active_task: self.active_task().cloned(),
        }
    }

    /// Record an activity entry (newest first)
    pub fn append_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(ACTIVITY_LIMIT);
    }

    /// Read activity entries, newest first
    pub fn read_activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        self.activity
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
