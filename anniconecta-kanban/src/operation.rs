//! Operation traits shared by every board command.
//!
//! Commands are structs where the fields are the parameters. Each one names
//! itself with a verb and a noun ("add task", "end drag") and executes
//! against a context, reporting whether the call should be audited.

use crate::error::BoardError;
use crate::types::LogEntry;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Metadata every command carries
pub trait Operation {
    fn verb(&self) -> &'static str;

    fn noun(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Canonical op string, e.g. "move task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run a command against a context.
///
/// Execution is synchronous: board commands never wait on anything.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

/// Dispatches commands and records what they did
pub trait OperationProcessor<C, E> {
    fn process<O: Execute<C, E>>(&self, op: &O, ctx: &mut C) -> Result<Value, E>;
}

/// Result of executing an operation
///
/// - Logged: the board changed and the call should be audited
/// - Unlogged: reads and no-op drag ticks
/// - Failed: errors, usually with a logged error entry
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}

/// What a command body produced, before logging is decided
pub(crate) enum Outcome {
    Changed(Value),
    Unchanged(Value),
}

/// Wrap a command body's result into an [`ExecutionResult`], building the
/// log entry from the command's own serialized parameters.
pub(crate) fn finish<O>(
    op: &O,
    start: Instant,
    result: Result<Outcome, BoardError>,
) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
{
    let duration_ms = start.elapsed().as_millis() as u64;
    let input = || serde_json::to_value(op).unwrap_or(Value::Null);

    match result {
        Ok(Outcome::Changed(value)) => ExecutionResult::Logged {
            log_entry: LogEntry::success(op.op_string(), input(), value.clone(), duration_ms),
            value,
        },
        Ok(Outcome::Unchanged(value)) => ExecutionResult::Unlogged { value },
        Err(error) => {
            let message = error.to_string();
            ExecutionResult::Failed {
                log_entry: Some(LogEntry::failure(op.op_string(), input(), &message, duration_ms)),
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Probe {
        id: &'static str,
    }

    impl Operation for Probe {
        fn verb(&self) -> &'static str {
            "probe"
        }
        fn noun(&self) -> &'static str {
            "board"
        }
        fn description(&self) -> &'static str {
            "test probe"
        }
    }

    #[test]
    fn test_op_string() {
        assert_eq!(Probe { id: "x" }.op_string(), "probe board");
    }

    #[test]
    fn test_finish_changed_is_logged() {
        let result = finish(
            &Probe { id: "x" },
            Instant::now(),
            Ok(Outcome::Changed(serde_json::json!({"ok": true}))),
        );
        assert!(result.should_log());
        let (value, entry) = result.split();
        assert_eq!(value.unwrap()["ok"], true);
        let entry = entry.unwrap();
        assert_eq!(entry.op, "probe board");
        assert_eq!(entry.input["id"], "x");
    }

    #[test]
    fn test_finish_unchanged_is_not_logged() {
        let result = finish(&Probe { id: "x" }, Instant::now(), Ok(Outcome::Unchanged(Value::Null)));
        assert!(!result.should_log());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_finish_error_logs_failure() {
        let result = finish(
            &Probe { id: "x" },
            Instant::now(),
            Err(BoardError::task_not_found("x")),
        );
        let (value, entry) = result.split();
        assert!(value.is_err());
        assert!(entry.unwrap().is_failure());
    }
}
