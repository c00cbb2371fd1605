//! Record model for the grade book.
//!
//! # Responsibility
//! - Define the value types stored inside grade book sequences.
//! - Own the deep-copy rules for each record.
//!
//! # Invariants
//! - Each level exclusively owns the next: student -> course sequence -> course.
//! - Records are never updated in place once stored; growth is append-only.

pub mod course;
pub mod student;

use crate::collections::sequence::AllocError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted course grade.
pub const MIN_GRADE: i32 = 0;
/// Highest accepted course grade.
pub const MAX_GRADE: i32 = 100;

/// Validation and storage failures raised by record constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Grade is outside `[MIN_GRADE, MAX_GRADE]`.
    InvalidGrade(i32),
    /// Student already carries a course with this name.
    DuplicateCourse(String),
    Alloc(AllocError),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGrade(grade) => write!(
                f,
                "grade {grade} is outside [{MIN_GRADE}, {MAX_GRADE}]"
            ),
            Self::DuplicateCourse(name) => write!(f, "course `{name}` already recorded"),
            Self::Alloc(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            Self::InvalidGrade(_) | Self::DuplicateCourse(_) => None,
        }
    }
}

impl From<AllocError> for RecordError {
    fn from(value: AllocError) -> Self {
        Self::Alloc(value)
    }
}
