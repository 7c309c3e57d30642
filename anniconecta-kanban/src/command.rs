//! BoardCommand: every board operation as one serde enum, so hosts can feed
//! scripted or remote steps through the processor.

use crate::board::GetBoard;
use crate::drag::{DragEnd, DragOver, DragStart};
use crate::error::{BoardError, Result};
use crate::operation::Operation;
use crate::task::{AddTask, DeleteTask, GetTask, UpdateTask};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardCommand {
    AddTask(AddTask),
    UpdateTask(UpdateTask),
    DeleteTask(DeleteTask),
    GetTask(GetTask),
    GetBoard(GetBoard),
    DragStart(DragStart),
    DragOver(DragOver),
    DragEnd(DragEnd),
}

impl BoardCommand {
    /// The wrapped operation's metadata
    pub fn operation(&self) -> &dyn Operation {
        match self {
            Self::AddTask(op) => op,
            Self::UpdateTask(op) => op,
            Self::DeleteTask(op) => op,
            Self::GetTask(op) => op,
            Self::GetBoard(op) => op,
            Self::DragStart(op) => op,
            Self::DragOver(op) => op,
            Self::DragEnd(op) => op,
        }
    }

    /// Parse a list of commands; `.json` content is detected by its leading
    /// bracket, anything else is read as YAML.
    pub fn parse_script(content: &str) -> Result<Vec<BoardCommand>> {
        if content.trim_start().starts_with('[') {
            Ok(serde_json::from_str(content)?)
        } else {
            let steps: Option<Vec<BoardCommand>> = serde_yaml_ng::from_str(content)?;
            steps.ok_or_else(|| BoardError::parse("script contains no steps"))
        }
    }
}
