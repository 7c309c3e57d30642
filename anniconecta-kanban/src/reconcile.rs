//! Move reconciliation: maps (board columns, drag event) to the next columns.
//!
//! The same function runs on every drag-over tick and once more at drag-end.
//! It is total over valid boards: malformed events (no target, dropping on
//! self, unknown ids) produce `None` and the caller keeps its state.
//!
//! Moves use array-move semantics, never swaps. Moving `t1` onto `t3` in
//! `[t1, t2, t3]` yields `[t2, t3, t1]`.

use crate::types::{Column, ColumnId, DragItem, TaskId};
use serde::Serialize;
use tracing::trace;

/// What a reconciliation did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveKind {
    /// Reordered within one column
    Reorder {
        column: ColumnId,
        from: usize,
        to: usize,
    },
    /// Relocated to another column
    Relocate {
        from_column: ColumnId,
        from_index: usize,
        to_column: ColumnId,
        to_index: usize,
    },
}

/// A proposed next board state, ready to commit
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub kind: MoveKind,
    pub columns: Vec<Column>,
}

/// Compute the board that results from hovering or dropping `active` over
/// `over`. Returns `None` when the board should stay as it is.
pub fn reconcile(columns: &[Column], active: &TaskId, over: Option<&DragItem>) -> Option<PlannedMove> {
    let Some(over) = over else {
        trace!(active = %active, "no drop target");
        return None;
    };
    if over.as_task() == Some(active) {
        trace!(active = %active, "dropped on itself");
        return None;
    }
    let Some((source_column, source_index)) = locate(columns, active) else {
        trace!(active = %active, "active task not on board");
        return None;
    };

    // Column targets have no index: the task goes to the end of the list
    let target = match over {
        DragItem::Column(id) => columns
            .iter()
            .position(|c| c.id == *id)
            .map(|column| (column, None)),
        DragItem::Task(id) => locate(columns, id).map(|(column, index)| (column, Some(index))),
    };
    let Some((target_column, over_index)) = target else {
        trace!(active = %active, over = %over, "drop target not on board");
        return None;
    };

    if target_column == source_column {
        let column = &columns[source_column];
        let to = over_index.unwrap_or(column.len() - 1);
        if to == source_index {
            trace!(active = %active, index = to, "already in place");
            return None;
        }
        let mut next = columns.to_vec();
        next[source_column] = move_within_column(column, source_index, to);
        Some(PlannedMove {
            kind: MoveKind::Reorder {
                column: column.id,
                from: source_index,
                to,
            },
            columns: next,
        })
    } else {
        let to_index = over_index.unwrap_or(columns[target_column].len());
        Some(PlannedMove {
            kind: MoveKind::Relocate {
                from_column: columns[source_column].id,
                from_index: source_index,
                to_column: columns[target_column].id,
                to_index,
            },
            columns: move_across_columns(
                columns,
                (source_column, source_index),
                target_column,
                over_index,
            ),
        })
    }
}

/// Move the task at `from` to index `to` within one column. Every other task
/// keeps its relative order.
///
/// Both indices must be in bounds.
pub fn move_within_column(column: &Column, from: usize, to: usize) -> Column {
    let mut tasks = (*column.tasks).clone();
    let task = tasks.remove(from);
    tasks.insert(to, task);
    column.rebuilt(tasks)
}

/// Take the task at `source = (column, index)` out of its column and insert
/// it into `target_column` at `insert_at`, or at the end when `None`.
///
/// Only the two touched columns are rebuilt; the rest share their task lists
/// with `columns`.
pub fn move_across_columns(
    columns: &[Column],
    source: (usize, usize),
    target_column: usize,
    insert_at: Option<usize>,
) -> Vec<Column> {
    let (source_column, source_index) = source;

    let mut source_tasks = (*columns[source_column].tasks).clone();
    let task = source_tasks.remove(source_index);

    let mut target_tasks = (*columns[target_column].tasks).clone();
    let at = insert_at.map_or(target_tasks.len(), |i| i.min(target_tasks.len()));
    target_tasks.insert(at, task);

    let mut next = columns.to_vec();
    next[source_column] = columns[source_column].rebuilt(source_tasks);
    next[target_column] = columns[target_column].rebuilt(target_tasks);
    next
}

fn locate(columns: &[Column], id: &TaskId) -> Option<(usize, usize)> {
    columns
        .iter()
        .enumerate()
        .find_map(|(ci, column)| column.position_of(id).map(|index| (ci, index)))
}
