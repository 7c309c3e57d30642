//! Board columns: the fixed set of workflow stages and their task lists

use super::ids::TaskId;
use super::task::Task;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A workflow stage. The set is closed; boards cannot define their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Backlog,
    Todo,
    InProgress,
    Review,
    Done,
    Blocked,
}

impl ColumnId {
    /// All stages in default display order
    pub const ALL: [ColumnId; 6] = [
        ColumnId::Backlog,
        ColumnId::Todo,
        ColumnId::InProgress,
        ColumnId::Review,
        ColumnId::Done,
        ColumnId::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }

    /// Display label used when a seed does not provide one
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
            Self::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BoardError::ColumnNotFound { id: s.to_string() })
    }
}

/// A column holds an ordered list of tasks, top to bottom.
///
/// The task list sits behind an `Arc` so a new board state can share the
/// lists of every column a move did not touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Arc<Vec<Task>>,
}

impl Column {
    /// Create an empty column titled after its stage
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            tasks: Arc::new(Vec::new()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Arc::new(tasks);
        self
    }

    /// Copy of this column with a different task list
    pub(crate) fn rebuilt(&self, tasks: Vec<Task>) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            tasks: Arc::new(tasks),
        }
    }

    /// Position of a task within this column
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
