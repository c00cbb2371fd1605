//! Student record with its owned course list.
//!
//! # Invariants
//! - Course names are unique within one student.
//! - `deep_copy` yields a course list equal in content and order, backed by
//!   independent storage.

use crate::collections::sequence::{copy_text, AllocError, DeepCopy, Sequence};
use crate::model::course::CourseRecord;
use crate::model::RecordError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Caller-assigned student identifier, unique within one grade book.
pub type StudentId = i32;

/// One student and the grades recorded for them.
#[derive(Debug, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    id: StudentId,
    courses: Sequence<CourseRecord>,
}

impl StudentRecord {
    /// Creates a student with an empty course list.
    pub fn new(name: &str, id: StudentId) -> Result<Self, AllocError> {
        Ok(Self {
            name: copy_text(name)?,
            id,
            courses: Sequence::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn courses(&self) -> &Sequence<CourseRecord> {
        &self.courses
    }

    pub fn has_course(&self, name: &str) -> bool {
        self.courses.find(|course| course.name() == name).is_some()
    }

    /// Appends a copy of `course` unless its name is already recorded.
    ///
    /// # Errors
    /// - `DuplicateCourse` when a course with the same name exists.
    /// - `Alloc` when the copy cannot be stored.
    pub fn add_course(&mut self, course: &CourseRecord) -> Result<(), RecordError> {
        if self.has_course(course.name()) {
            return Err(RecordError::DuplicateCourse(course.name().to_string()));
        }
        self.courses.append(course)?;
        Ok(())
    }

    /// Arithmetic mean of all grades; `0.0` when no course is recorded.
    pub fn average(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .courses
            .iter()
            .map(|course| f64::from(course.grade()))
            .sum();
        total / self.courses.len() as f64
    }
}

impl DeepCopy for StudentRecord {
    fn deep_copy(&self) -> Result<Self, AllocError> {
        Ok(Self {
            name: self.name.deep_copy()?,
            id: self.id,
            courses: self.courses.deep_copy()?,
        })
    }
}

/// Renders `<name> <id>:` followed by ` <course> <grade>` entries joined by
/// `", "`, terminated by a newline.
impl Display for StudentRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:", self.name, self.id)?;
        for (index, course) in self.courses.iter().enumerate() {
            let separator = if index == 0 { " " } else { ", " };
            write!(f, "{separator}{} {}", course.name(), course.grade())?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::StudentRecord;
    use crate::model::course::CourseRecord;
    use crate::model::RecordError;

    fn alice_with(courses: &[(&str, i32)]) -> StudentRecord {
        let mut student = StudentRecord::new("Alice", 1).expect("student");
        for (name, grade) in courses {
            let course = CourseRecord::new(name, *grade).expect("course");
            student.add_course(&course).expect("add course");
        }
        student
    }

    #[test]
    fn display_without_courses_has_no_course_section() {
        assert_eq!(alice_with(&[]).to_string(), "Alice 1:\n");
    }

    #[test]
    fn display_joins_courses_in_insertion_order() {
        let student = alice_with(&[("Math", 80), ("Bio", 100)]);
        assert_eq!(student.to_string(), "Alice 1: Math 80, Bio 100\n");
    }

    #[test]
    fn add_course_rejects_duplicate_name_and_keeps_first() {
        let mut student = alice_with(&[("Math", 80)]);
        let again = CourseRecord::new("Math", 95).expect("course");
        let err = student.add_course(&again).expect_err("duplicate");
        assert_eq!(err, RecordError::DuplicateCourse("Math".to_string()));
        assert_eq!(student.courses().len(), 1);
        assert_eq!(student.to_string(), "Alice 1: Math 80\n");
    }

    #[test]
    fn average_is_raw_mean() {
        assert_eq!(alice_with(&[]).average(), 0.0);
        assert_eq!(alice_with(&[("Math", 80), ("Bio", 100)]).average(), 90.0);
        let thirds = alice_with(&[("A", 1), ("B", 1), ("C", 0)]);
        assert!((thirds.average() - 2.0 / 3.0).abs() < f64::EPSILON);
    }
}
