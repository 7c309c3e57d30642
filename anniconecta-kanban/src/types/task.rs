//! Task types: Task, Subtask, Priority

use super::ids::{SubtaskId, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Task priority. Display only; never affects ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// A task/card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Free-text labels, kept in insertion order for display
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create a new task with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(TaskId::new(), title)
    }

    /// Create a task with a caller-chosen id
    pub fn with_id(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            tags: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Add a tag unless it is already present
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn with_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Fraction of completed subtasks; 0.0 when there are none.
    pub fn progress(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }
        let completed = self.subtasks.iter().filter(|s| s.completed).count();
        completed as f64 / self.subtasks.len() as f64
    }

    /// Drop repeated tags, keeping the first occurrence of each
    pub fn dedup_tags(&mut self) {
        let mut seen = HashSet::new();
        self.tags.retain(|tag| seen.insert(tag.clone()));
    }

    /// First subtask id that appears more than once, if any
    pub fn duplicate_subtask_id(&self) -> Option<&SubtaskId> {
        let mut seen = HashSet::new();
        self.subtasks
            .iter()
            .map(|s| &s.id)
            .find(|id| !seen.insert(*id))
    }
}

/// A checklist item inside a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SubtaskId::new(),
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<SubtaskId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}
