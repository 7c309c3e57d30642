//! Error types for the board engine
//!
//! Drag reconciliation never fails; these errors come from the explicit
//! edit paths (add, update, delete) and from loading seed boards.

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("parse error: {message}")]
    Parse { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoardError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Whether the error names something missing from the board
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::ColumnNotFound { .. }
        )
    }
}
