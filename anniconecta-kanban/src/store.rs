//! Board state store: the authoritative ordered column -> task structure.
//!
//! State is immutable per update. Every change builds a new column list,
//! rebuilds only the columns it touches, and swaps the whole list in one
//! step. Untouched columns keep sharing their task lists with the previous
//! state, so hosts can detect change with [`Arc::ptr_eq`] or by watching
//! [`BoardStore::revision`].

use crate::error::{BoardError, Result};
use crate::types::{Column, ColumnId, Task, TaskId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a task currently lives on the board
#[derive(Debug, Clone, Copy)]
pub struct TaskLocation<'a> {
    pub column: &'a Column,
    /// Index of the column in the board's column list
    pub column_index: usize,
    /// Index of the task within its column
    pub index: usize,
    pub task: &'a Task,
}

#[derive(Debug, Clone)]
pub struct BoardStore {
    columns: Arc<Vec<Column>>,
    revision: u64,
}

impl BoardStore {
    /// Create a store from seed columns, rejecting seeds that break the
    /// board invariants. Repeated tags are collapsed.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let columns: Vec<Column> = columns
            .iter()
            .map(|column| {
                column.rebuilt(
                    column
                        .tasks
                        .iter()
                        .cloned()
                        .map(|mut task| {
                            task.dedup_tags();
                            task
                        })
                        .collect(),
                )
            })
            .collect();
        check_invariants(&columns)?;
        Ok(Self {
            columns: Arc::new(columns),
            revision: 0,
        })
    }

    /// The current column list. Cloning the `Arc` is a cheap snapshot.
    pub fn columns(&self) -> &Arc<Vec<Column>> {
        &self.columns
    }

    /// Number of commits applied since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn find_column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Find the column currently holding a task
    pub fn find_task_owner(&self, id: &TaskId) -> Option<TaskLocation<'_>> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column.position_of(id).map(|index| TaskLocation {
                    column,
                    column_index,
                    index,
                    task: &column.tasks[index],
                })
            })
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.find_task_owner(id).map(|loc| loc.task)
    }

    pub fn task_count(&self, column: ColumnId) -> Option<usize> {
        self.find_column(column).map(Column::len)
    }

    pub fn task_total(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Replace a task's content in place. Column membership and order are
    /// untouched.
    pub fn replace_task(&mut self, mut updated: Task) -> Result<()> {
        updated.dedup_tags();
        let (column_index, index) = self
            .find_task_owner(&updated.id)
            .map(|loc| (loc.column_index, loc.index))
            .ok_or_else(|| BoardError::task_not_found(&updated.id))?;

        let mut columns = (*self.columns).clone();
        let mut tasks = (*columns[column_index].tasks).clone();
        tasks[index] = updated;
        columns[column_index] = columns[column_index].rebuilt(tasks);
        self.commit(columns)
    }

    /// Append a new task to the end of a column
    pub fn add_task(&mut self, column: ColumnId, mut task: Task) -> Result<()> {
        task.dedup_tags();
        let column_index = self
            .columns
            .iter()
            .position(|c| c.id == column)
            .ok_or_else(|| BoardError::column_not_found(column))?;

        let mut columns = (*self.columns).clone();
        let mut tasks = (*columns[column_index].tasks).clone();
        tasks.push(task);
        columns[column_index] = columns[column_index].rebuilt(tasks);
        self.commit(columns)
    }

    /// Remove a task from the board, returning it
    pub fn delete_task(&mut self, id: &TaskId) -> Result<Task> {
        let (column_index, index) = self
            .find_task_owner(id)
            .map(|loc| (loc.column_index, loc.index))
            .ok_or_else(|| BoardError::task_not_found(id))?;

        let mut columns = (*self.columns).clone();
        let mut tasks = (*columns[column_index].tasks).clone();
        let removed = tasks.remove(index);
        columns[column_index] = columns[column_index].rebuilt(tasks);
        self.commit(columns)?;
        Ok(removed)
    }

    /// Atomically replace the whole column list.
    ///
    /// A proposal that breaks the board invariants is rejected and the
    /// previously committed state stays in place.
    pub fn commit(&mut self, columns: Vec<Column>) -> Result<()> {
        if let Err(e) = check_invariants(&columns) {
            warn!(revision = self.revision, error = %e, "rejected board commit");
            return Err(e);
        }
        self.columns = Arc::new(columns);
        self.revision += 1;
        debug!(revision = self.revision, tasks = self.task_total(), "committed board state");
        Ok(())
    }
}

/// Check that column ids are unique, every task id appears once across the
/// board, and subtask ids are unique within each task.
pub fn check_invariants(columns: &[Column]) -> Result<()> {
    let mut column_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for column in columns {
        if !column_ids.insert(column.id) {
            return Err(BoardError::duplicate_id("column", column.id.as_str()));
        }
        for task in column.tasks.iter() {
            if !task_ids.insert(&task.id) {
                return Err(BoardError::duplicate_id("task", task.id.as_str()));
            }
            if let Some(subtask_id) = task.duplicate_subtask_id() {
                return Err(BoardError::duplicate_id("subtask", subtask_id.as_str()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Priority, Subtask};

    fn store() -> BoardStore {
        BoardStore::new(vec![
            Column::new(ColumnId::Todo)
                .with_tasks(vec![Task::with_id("t1", "One"), Task::with_id("t2", "Two")]),
            Column::new(ColumnId::InProgress).with_tasks(vec![Task::with_id("t3", "Three")]),
            Column::new(ColumnId::Done),
        ])
        .unwrap()
    }

    fn ids(store: &BoardStore, column: ColumnId) -> Vec<String> {
        store
            .find_column(column)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    #[test]
    fn test_find_column() {
        let store = store();
        assert_eq!(store.find_column(ColumnId::Done).unwrap().title, "Done");
        assert!(store.find_column(ColumnId::Blocked).is_none());
    }

    #[test]
    fn test_find_task_owner() {
        let store = store();
        let loc = store.find_task_owner(&TaskId::from("t2")).unwrap();
        assert_eq!(loc.column.id, ColumnId::Todo);
        assert_eq!(loc.column_index, 0);
        assert_eq!(loc.index, 1);
        assert_eq!(loc.task.title, "Two");
        assert!(store.find_task_owner(&TaskId::from("nope")).is_none());
    }

    #[test]
    fn test_seed_with_duplicate_task_rejected() {
        let result = BoardStore::new(vec![
            Column::new(ColumnId::Todo).with_tasks(vec![Task::with_id("t1", "One")]),
            Column::new(ColumnId::Done).with_tasks(vec![Task::with_id("t1", "Again")]),
        ]);
        assert!(matches!(result, Err(BoardError::DuplicateId { .. })));
    }

    #[test]
    fn test_seed_with_duplicate_column_rejected() {
        let result = BoardStore::new(vec![Column::new(ColumnId::Todo), Column::new(ColumnId::Todo)]);
        assert!(matches!(
            result,
            Err(BoardError::DuplicateId { ref item_type, .. }) if item_type == "column"
        ));
    }

    #[test]
    fn test_replace_task_keeps_position() {
        let mut store = store();
        let before = store.columns().clone();

        let mut task = store.find_task(&TaskId::from("t1")).unwrap().clone();
        task.priority = Priority::Urgent;
        store.replace_task(task).unwrap();

        assert_eq!(ids(&store, ColumnId::Todo), vec!["t1", "t2"]);
        assert_eq!(
            store.find_task(&TaskId::from("t1")).unwrap().priority,
            Priority::Urgent
        );
        assert_eq!(store.revision(), 1);

        // Untouched columns share their task lists with the old state
        assert!(!Arc::ptr_eq(&before, store.columns()));
        assert!(Arc::ptr_eq(&before[1].tasks, &store.columns()[1].tasks));
        assert!(!Arc::ptr_eq(&before[0].tasks, &store.columns()[0].tasks));
    }

    #[test]
    fn test_tags_are_collapsed_on_every_write() {
        let mut task = Task::with_id("t5", "Five");
        task.tags = vec!["ops".into(), "ops".into()];
        let mut store = BoardStore::new(vec![
            Column::new(ColumnId::Todo).with_tasks(vec![task.clone()])
        ])
        .unwrap();
        assert_eq!(store.find_task(&task.id).unwrap().tags, vec!["ops"]);

        task.tags = vec!["hr".into(), "ops".into(), "hr".into()];
        store.replace_task(task.clone()).unwrap();
        assert_eq!(store.find_task(&task.id).unwrap().tags, vec!["hr", "ops"]);

        let mut added = Task::with_id("t6", "Six");
        added.tags = vec!["x".into(), "x".into()];
        store.add_task(ColumnId::Todo, added).unwrap();
        assert_eq!(store.find_task(&TaskId::from("t6")).unwrap().tags, vec!["x"]);
    }

    #[test]
    fn test_replace_unknown_task() {
        let mut store = store();
        let result = store.replace_task(Task::with_id("ghost", "Ghost"));
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_replace_task_with_duplicate_subtasks_rejected() {
        let mut store = store();
        let task = Task::with_id("t1", "One")
            .with_subtask(Subtask::new("a").with_id("s"))
            .with_subtask(Subtask::new("b").with_id("s"));
        assert!(matches!(
            store.replace_task(task),
            Err(BoardError::DuplicateId { .. })
        ));
        assert!(store.find_task(&TaskId::from("t1")).unwrap().subtasks.is_empty());
    }

    #[test]
    fn test_add_task_appends() {
        let mut store = store();
        store
            .add_task(ColumnId::Todo, Task::with_id("t4", "Four"))
            .unwrap();
        assert_eq!(ids(&store, ColumnId::Todo), vec!["t1", "t2", "t4"]);
        assert_eq!(store.task_total(), 4);
    }

    #[test]
    fn test_add_task_errors() {
        let mut store = store();
        assert!(matches!(
            store.add_task(ColumnId::Blocked, Task::new("x")),
            Err(BoardError::ColumnNotFound { .. })
        ));
        assert!(matches!(
            store.add_task(ColumnId::Done, Task::with_id("t3", "dup")),
            Err(BoardError::DuplicateId { .. })
        ));
        assert_eq!(store.task_total(), 3);
    }

    #[test]
    fn test_delete_task() {
        let mut store = store();
        let removed = store.delete_task(&TaskId::from("t1")).unwrap();
        assert_eq!(removed.title, "One");
        assert_eq!(ids(&store, ColumnId::Todo), vec!["t2"]);
        assert!(matches!(
            store.delete_task(&TaskId::from("t1")),
            Err(BoardError::TaskNotFound { .. })
        ));
    }

    #[test]
    fn test_commit_rejects_invalid_state() {
        let mut store = store();
        let mut columns = (**store.columns()).clone();
        columns[2] = columns[2].rebuilt(vec![Task::with_id("t1", "Copy")]);
        assert!(store.commit(columns).is_err());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.task_count(ColumnId::Done), Some(0));
    }
}
