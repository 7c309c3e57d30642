//! Seed boards: the initial column list handed to a new board context.
//!
//! The demo board ships as YAML compiled into the crate and is parsed on
//! demand, so every context gets its own copy.

use crate::error::{BoardError, Result};
use crate::store::check_invariants;
use crate::types::{Column, ColumnId, Task};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const BUILTIN_SEED: &str = include_str!("../builtin/seed.yaml");

/// Validated initial board content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSeed {
    columns: Vec<Column>,
}

/// On-disk shape; column titles are optional
#[derive(Debug, Deserialize)]
struct RawSeed {
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
struct RawColumn {
    id: ColumnId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl BoardSeed {
    /// Build a seed from columns, checking the board invariants
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        check_invariants(&columns)?;
        Ok(Self { columns })
    }

    /// All six stages, no tasks
    pub fn default_columns() -> Self {
        Self {
            columns: ColumnId::ALL.iter().map(|id| Column::new(*id)).collect(),
        }
    }

    /// The demo board compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_SEED)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: RawSeed = serde_yaml_ng::from_str(yaml)?;
        Self::from_raw(raw)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSeed = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Load a seed file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading board seed");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    fn from_raw(raw: RawSeed) -> Result<Self> {
        if raw.columns.is_empty() {
            return Err(BoardError::invalid_value("columns", "a board needs at least one column"));
        }
        let columns = raw
            .columns
            .into_iter()
            .map(|c| {
                let mut tasks = c.tasks;
                tasks.iter_mut().for_each(Task::dedup_tags);
                Column {
                    id: c.id,
                    title: c.title.unwrap_or_else(|| c.id.default_title().to_string()),
                    tasks: Arc::new(tasks),
                }
            })
            .collect();
        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    #[test]
    fn test_builtin_seed_is_valid() {
        let seed = BoardSeed::builtin().unwrap();
        let ids: Vec<ColumnId> = seed.columns().iter().map(|c| c.id).collect();
        assert_eq!(ids, ColumnId::ALL.to_vec());
        assert!(seed.columns().iter().map(Column::len).sum::<usize>() > 0);
    }

    #[test]
    fn test_default_columns_are_empty() {
        let seed = BoardSeed::default_columns();
        assert_eq!(seed.columns().len(), 6);
        assert!(seed.columns().iter().all(Column::is_empty));
    }

    #[test]
    fn test_missing_title_uses_stage_default() {
        let seed = BoardSeed::from_yaml(
            r#"
columns:
  - id: in-progress
    tasks:
      - id: t1
        title: Quarterly donor report
        priority: high
        tags: [finance]
"#,
        )
        .unwrap();
        let column = &seed.columns()[0];
        assert_eq!(column.title, "In Progress");
        assert_eq!(column.tasks[0].priority, Priority::High);
        assert_eq!(column.tasks[0].tags, vec!["finance"]);
    }

    #[test]
    fn test_repeated_tags_collapsed() {
        let seed = BoardSeed::from_yaml(
            "columns:\n  - id: todo\n    tasks: [{id: t1, title: A, tags: [hr, finance, hr]}]\n",
        )
        .unwrap();
        assert_eq!(seed.columns()[0].tasks[0].tags, vec!["hr", "finance"]);
    }

    #[test]
    fn test_duplicate_task_ids_rejected() {
        let result = BoardSeed::from_yaml(
            r#"
columns:
  - id: todo
    tasks: [{id: t1, title: A}]
  - id: done
    tasks: [{id: t1, title: B}]
"#,
        );
        assert!(matches!(result, Err(BoardError::DuplicateId { .. })));
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let result = BoardSeed::from_yaml("columns:\n  - id: archive\n");
        assert!(matches!(result, Err(BoardError::Yaml(_))));
    }

    #[test]
    fn test_empty_board_rejected() {
        let result = BoardSeed::from_json(r#"{"columns": []}"#);
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
    }
}
