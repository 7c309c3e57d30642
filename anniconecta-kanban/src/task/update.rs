//! UpdateTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::operation::{finish, Execute, ExecutionResult, Operation, Outcome};
use crate::types::{Priority, Subtask, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Edit a task's content. Identity, column and position never change.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Replace all tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replace all subtasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<Subtask>>,
}

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            priority: None,
            tags: None,
            subtasks: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

    /// Set the tags (replaces all existing tags)
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set the subtasks (replaces all existing subtasks)
    pub fn with_subtasks(mut self, subtasks: Vec<Subtask>) -> Self {
        self.subtasks = Some(subtasks);
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Outcome> {
        let mut task = ctx
            .store()
            .find_task(&self.id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(BoardError::invalid_value("title", "must not be empty"));
            }
            task.title = title.to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
            task.dedup_tags();
        }
        if let Some(subtasks) = &self.subtasks {
            task.subtasks = subtasks.clone();
        }

        let value = serde_json::to_value(&task)?;
        ctx.update_task(task)?;
        Ok(Outcome::Changed(value))
    }
}

impl Operation for UpdateTask {
    fn verb(&self) -> &'static str {
        "update"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Update task properties"
    }
}

impl Execute<BoardContext, BoardError> for UpdateTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(ctx);
        finish(self, start, result)
    }
}
