//! Custom error types for LifePath.
//!
//! This module provides structured error types that enable better
//! error handling, reporting, and recovery throughout the application.

use std::path::PathBuf;
use thiserror::Error;

use crate::roadmap::StageStatus;
use crate::onboarding::SurveyStep;

/// Main error type for LifePath operations
#[derive(Error, Debug)]
pub enum LifePathError {
    // =========================================================================
    // Not-Found Errors
    // =========================================================================
    /// Unknown stage id passed to a roadmap operation
    #[error("No stage with id '{id}' on this mountain")]
    StageNotFound { id: String },

    /// Unknown task id passed to a daily plan operation
    #[error("No task with id '{id}' in today's plan")]
    TaskNotFound { id: String },

    // =========================================================================
    // Invalid-State Errors
    // =========================================================================
    /// Completion attempted on a stage that is not the current frontier
    #[error("Stage '{id}' is {status} and cannot be completed")]
    StageNotEligible { id: String, status: StageStatus },

    /// Completion attempted on an already-completed task
    #[error("Task '{id}' is already completed")]
    TaskAlreadyComplete { id: String },

    /// A stage list whose statuses are not ordered completed/current/locked
    #[error("Corrupt roadmap: {reason}")]
    CorruptRoadmap { reason: String },

    /// Survey submitted with a step that cannot advance
    #[error("Survey step '{step}' is incomplete: {reason}")]
    SurveyIncomplete { step: SurveyStep, reason: String },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Custom task created with an empty or whitespace-only title
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Survey selection not present in the step's option catalog
    #[error("'{option}' is not an option for survey step '{step}'")]
    UnknownOption { step: SurveyStep, option: String },

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// No saved session exists yet
    #[error("No session found at {path} - run `lifepath onboard` first")]
    SessionNotFound { path: PathBuf },

    /// Session load/save failed
    #[error("Session error: {message}")]
    Session { message: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LifePathError {
    // =========================================================================
    // Constructor helpers
    // =========================================================================

    /// Create a stage-not-found error
    pub fn stage_not_found(id: impl Into<String>) -> Self {
        Self::StageNotFound { id: id.into() }
    }

    /// Create a task-not-found error
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::TaskNotFound { id: id.into() }
    }

    /// Create a corrupt-roadmap error
    pub fn corrupt_roadmap(reason: impl Into<String>) -> Self {
        Self::CorruptRoadmap {
            reason: reason.into(),
        }
    }

    /// Create a session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    /// Check if this error is a not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StageNotFound { .. } | Self::TaskNotFound { .. })
    }

    /// Check if this error is an invalid-state rejection
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::StageNotEligible { .. }
                | Self::TaskAlreadyComplete { .. }
                | Self::CorruptRoadmap { .. }
                | Self::SurveyIncomplete { .. }
        )
    }

    /// Check if this error is recoverable (the caller can retry or ignore)
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::Json(_) | Self::Other(_) | Self::Session { .. }
        )
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StageNotFound { .. } | Self::TaskNotFound { .. } => 2,
            Self::StageNotEligible { .. } | Self::TaskAlreadyComplete { .. } => 3,
            Self::EmptyTitle | Self::UnknownOption { .. } | Self::SurveyIncomplete { .. } => 4,
            Self::SessionNotFound { .. } => 5,
            Self::CorruptRoadmap { .. } => 6,
            Self::InvalidConfig { .. } => 7,
            _ => 1,
        }
    }
}

/// Type alias for LifePath results
pub type Result<T> = std::result::Result<T, LifePathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LifePathError::StageNotEligible {
            id: "5".to_string(),
            status: StageStatus::Locked,
        };
        assert!(err.to_string().contains("'5'"));
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(LifePathError::stage_not_found("x").is_not_found());
        assert!(LifePathError::task_not_found("x").is_not_found());
        assert!(!LifePathError::EmptyTitle.is_not_found());
    }

    #[test]
    fn test_is_invalid_state() {
        assert!(LifePathError::TaskAlreadyComplete {
            id: "1".to_string()
        }
        .is_invalid_state());
        assert!(LifePathError::corrupt_roadmap("two current stages").is_invalid_state());
        assert!(!LifePathError::stage_not_found("x").is_invalid_state());
    }

    #[test]
    fn test_is_recoverable() {
        assert!(LifePathError::EmptyTitle.is_recoverable());
        assert!(LifePathError::task_not_found("9").is_recoverable());
        assert!(!LifePathError::session("disk full").is_recoverable());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LifePathError::stage_not_found("a").exit_code(), 2);
        assert_eq!(
            LifePathError::TaskAlreadyComplete {
                id: "1".to_string()
            }
            .exit_code(),
            3
        );
        assert_eq!(LifePathError::EmptyTitle.exit_code(), 4);
        assert_eq!(LifePathError::corrupt_roadmap("x").exit_code(), 6);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LifePathError = io_err.into();
        assert!(matches!(err, LifePathError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
