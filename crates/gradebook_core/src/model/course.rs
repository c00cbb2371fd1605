//! Course grade record.

use crate::collections::sequence::{copy_text, AllocError, DeepCopy};
use crate::model::{RecordError, MAX_GRADE, MIN_GRADE};
use serde::Serialize;

/// One named grade inside a student's course list.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    name: String,
    grade: i32,
}

impl CourseRecord {
    /// Builds a course record with an owned copy of `name`.
    ///
    /// # Errors
    /// - `InvalidGrade` when `grade` is outside `[MIN_GRADE, MAX_GRADE]`;
    ///   checked before any storage is requested.
    /// - `Alloc` when the name cannot be copied.
    pub fn new(name: &str, grade: i32) -> Result<Self, RecordError> {
        validate_grade(grade)?;
        Ok(Self {
            name: copy_text(name)?,
            grade,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> i32 {
        self.grade
    }
}

impl DeepCopy for CourseRecord {
    fn deep_copy(&self) -> Result<Self, AllocError> {
        Ok(Self {
            name: self.name.deep_copy()?,
            grade: self.grade,
        })
    }
}

/// Rejects grades outside the accepted range.
pub fn validate_grade(grade: i32) -> Result<(), RecordError> {
    if (MIN_GRADE..=MAX_GRADE).contains(&grade) {
        Ok(())
    } else {
        Err(RecordError::InvalidGrade(grade))
    }
}
