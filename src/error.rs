use crate::domain::BoardId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Board not found: {0}")]
    BoardNotFound(BoardId),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Card already exists: {0}")]
    DuplicateCard(String),

    #[error("Operation failed: {0}")]
    TransientFailure(String),

    #[error("Invalid job ID format: {0}")]
    InvalidJobId(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DispatchError {
    /// True for the missing-board and missing-card cases
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BoardNotFound(_) | Self::CardNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_family() {
        assert!(DispatchError::BoardNotFound(BoardId::new(9)).is_not_found());
        assert!(DispatchError::CardNotFound("JOB-1".to_string()).is_not_found());
        assert!(!DispatchError::TransientFailure("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = DispatchError::BoardNotFound(BoardId::new(7));
        assert_eq!(err.to_string(), "Board not found: 7");

        let err = DispatchError::CardNotFound("JOB-1".to_string());
        assert_eq!(err.to_string(), "Card not found: JOB-1");
    }
}
