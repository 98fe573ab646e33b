//! Domain Errors
//!
//! The `Display` text of each error is what the UI shows in its toast.

use thiserror::Error;

/// Rejected fee payment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// Amount is zero, negative, larger than the balance, or unparseable
    #[error("Please enter a valid payment amount.")]
    InvalidAmount,
    #[error("No fee record with id {0}.")]
    NotFound(String),
}

/// Rejected grade submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeEntryError {
    #[error("Please select both class and student.")]
    MissingSelection,
    #[error("Student {0} is not enrolled in the selected class.")]
    UnknownStudent(String),
}

/// Rejected "Create Assignment" form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseworkError {
    #[error("Please enter an assignment title.")]
    MissingTitle,
    #[error("Please select a class.")]
    MissingClass,
    #[error("Please pick a due date.")]
    InvalidDueDate,
}

/// Amount text that is not a decimal number with at most two places
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid amount")]
pub struct MoneyParseError(pub String);

impl From<MoneyParseError> for FeeError {
    fn from(_: MoneyParseError) -> Self {
        FeeError::InvalidAmount
    }
}

/// Invalid school configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid school configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
