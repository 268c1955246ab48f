//! Registry error types.
//!
//! Every failure here is recoverable: the caller reports it and carries on
//! with the same registry.

use thiserror::Error;

/// Errors returned by [`CourseRegistry`](crate::registry::CourseRegistry) and
/// [`Course`](crate::model::Course) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The code does not match one letter, four digits, one letter.
    #[error("invalid course code format: {0:?}")]
    InvalidCodeFormat(String),

    /// A course with a case-insensitively equal code already exists.
    #[error("course code already registered: {0}")]
    DuplicateCode(String),

    /// No course with this code.
    #[error("course not found: {0}")]
    NotFound(String),

    /// An evaluation score outside 1..=5.
    #[error("{category} score must be between 1 and 5, got {value}")]
    InvalidScore { category: Category, value: i64 },

    /// A configured capacity bound was reached.
    #[error("capacity exceeded: at most {limit} {what}")]
    CapacityExceeded { what: &'static str, limit: usize },
}

/// The three scored aspects of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Teacher,
    Contents,
    Exam,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Teacher => write!(f, "teacher"),
            Category::Contents => write!(f, "contents"),
            Category::Exam => write!(f, "exam"),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
