//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{AdId, ClockTimeError, GameId, WeekDaysError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Ad not found: {0}")]
    AdNotFound(AdId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid clock time: {0}")]
    InvalidClockTime(#[from] ClockTimeError),

    #[error("Invalid week days: {0}")]
    InvalidWeekDays(#[from] WeekDaysError),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::AdNotFound(_) => "UNKNOWN_AD",
            Self::InvalidClockTime(_) => "INVALID_CLOCK_TIME",
            Self::InvalidWeekDays(_) => "INVALID_WEEK_DAYS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GameNotFound(_) | Self::AdNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidClockTime(_) | Self::InvalidWeekDays(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::GameNotFound(GameId::generate());
        assert_eq!(err.code(), "UNKNOWN_GAME");

        let err = DomainError::from(ClockTimeError::OutOfRange(2000));
        assert_eq!(err.code(), "INVALID_CLOCK_TIME");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::GameNotFound(GameId::generate()).is_not_found());
        assert!(DomainError::AdNotFound(AdId::generate()).is_not_found());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::from(WeekDaysError {
            stored: "1,x".to_string(),
            element: "x".to_string(),
        })
        .is_validation());
        assert!(DomainError::from(ClockTimeError::OutOfRange(-1)).is_validation());
        assert!(!DomainError::AdNotFound(AdId::generate()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::from(ClockTimeError::OutOfRange(1440));
        assert_eq!(
            err.to_string(),
            "Invalid clock time: minute offset 1440 is outside 0-1439"
        );
    }
}
