//! AddTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::{ColumnId, Priority, Subtask, Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create a new task at the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// Task title
    pub title: String,
    /// Target column (defaults to todo)
    #[serde(default = "default_column")]
    pub column: ColumnId,
    /// Explicit id; a ULID is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,
}

fn default_column() -> ColumnId {
    ColumnId::Todo
}

impl AddTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            column: default_column(),
            id: None,
            description: None,
            priority: None,
            tags: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    pub fn in_column(mut self, column: ColumnId) -> Self {
        self.column = column;
        self
    }

    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_subtasks(mut self, subtasks: Vec<Subtask>) -> Self {
        self.subtasks = subtasks;
        self
    }

    fn build(&self) -> Result<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::invalid_value("title", "must not be empty"));
        }
        let mut task = match &self.id {
            Some(id) => Task::with_id(id.clone(), title),
            None => Task::new(title),
        };
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        task.priority = self.priority.unwrap_or_default();
        for tag in &self.tags {
            task = task.with_tag(tag.clone());
        }
        task.subtasks = self.subtasks.clone();
        Ok(task)
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let task = self.build()?;
        let value = serde_json::to_value(&task)?;
        ctx.add_task(self.column, task)?;
        Ok(Outcome::Changed(value))
    }
}

impl Operation for AddTask {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Create a new task at the end of a column"
    }
}

impl Execute<BoardContext, BoardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
