use thiserror::Error;

/// Ways a queued task can end without applying its effect.
///
/// All of these are expected control flow: the dispatcher logs them at
/// trace level and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task was cancelled")]
    Cancelled,
    #[error("task from generation {task} superseded by generation {current}")]
    Superseded { task: u64, current: u64 },
    #[error("owner of task `{0}` no longer exists")]
    Detached(&'static str),
}

pub type TaskResult = Result<(), TaskError>;
