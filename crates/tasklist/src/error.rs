use std::fmt;

/// Errors surfaced by task list operations.
///
/// A check, uncheck or remove that finds no matching record is not an error;
/// see [`crate::ApplyOutcome::Missed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The new task title was empty or whitespace only. Carries the message
    /// shown to the user.
    Validation(String),
    /// The storage backend is unavailable or refused the operation.
    Storage(String),
    /// The task sequence could not be encoded.
    Serialization(String),
    /// The persisted value is not a valid task sequence.
    Deserialization(String),
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Validation(message) => write!(f, "{message}"),
            TaskError::Storage(message) => write!(f, "storage error: {message}"),
            TaskError::Serialization(message) => write!(f, "failed to encode tasks: {message}"),
            TaskError::Deserialization(message) => {
                write!(f, "failed to decode tasks: {message}")
            }
        }
    }
}

impl std::error::Error for TaskError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_bare_message() {
        let error = TaskError::Validation("You left the field empty!".to_string());
        assert_eq!(error.to_string(), "You left the field empty!");
        assert!(error.is_validation());
    }

    #[test]
    fn test_storage_display_has_context() {
        let error = TaskError::Storage("quota exceeded".to_string());
        assert_eq!(error.to_string(), "storage error: quota exceeded");
        assert!(!error.is_validation());
    }
}
