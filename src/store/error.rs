use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Please enter a valid number")]
    InvalidInput,

    #[error("Task number must be between 1 and {len}")]
    OutOfRange { len: usize },

    #[error("No tasks to export")]
    EmptyList,

    #[error("Error exporting tasks: {0}")]
    WriteFailure(#[from] std::io::Error),
}

impl TaskError {
    /// True for failures the user can fix by changing what they typed or
    /// adding tasks first, as opposed to an I/O problem.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, TaskError::WriteFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
