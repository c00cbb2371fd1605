//! Grade book aggregate.
//!
//! # Responsibility
//! - Own every student record and route add/query/print use-cases to them.
//! - Translate record-level failures into the grade book error taxonomy.
//!
//! # Invariants
//! - Student ids are unique within one book.
//! - Every mutating call validates fully before touching storage, so a
//!   failure leaves the book exactly as it was.
//! - Growth is monotonic: nothing is updated or removed once added.
//! - Log events carry ids and counts only, never student or course names.

use crate::collections::sequence::{copy_text, AllocError, Iter, Sequence};
use crate::model::course::CourseRecord;
use crate::model::student::{StudentId, StudentRecord};
use crate::model::RecordError;
use log::{debug, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GradeBookResult<T> = Result<T, GradeBookError>;

/// Coarse failure classes reported to shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AllocationFailure,
    DuplicateKey,
    NotFound,
    InvalidArgument,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllocationFailure => "allocation_failure",
            Self::DuplicateKey => "duplicate_key",
            Self::NotFound => "not_found",
            Self::InvalidArgument => "invalid_argument",
        }
    }
}

/// Failure result of a grade book operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeBookError {
    AllocationFailure(AllocError),
    DuplicateStudent(StudentId),
    DuplicateCourse { student_id: StudentId, course: String },
    StudentNotFound(StudentId),
    InvalidGrade(i32),
}

impl GradeBookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailure(_) => ErrorKind::AllocationFailure,
            Self::DuplicateStudent(_) | Self::DuplicateCourse { .. } => ErrorKind::DuplicateKey,
            Self::StudentNotFound(_) => ErrorKind::NotFound,
            Self::InvalidGrade(_) => ErrorKind::InvalidArgument,
        }
    }

    fn from_record(student_id: StudentId, err: RecordError) -> Self {
        match err {
            RecordError::InvalidGrade(grade) => Self::InvalidGrade(grade),
            RecordError::DuplicateCourse(course) => Self::DuplicateCourse { student_id, course },
            RecordError::Alloc(err) => Self::AllocationFailure(err),
        }
    }
}

impl Display for GradeBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllocationFailure(err) => write!(f, "{err}"),
            Self::DuplicateStudent(id) => write!(f, "student id {id} already exists"),
            Self::DuplicateCourse { student_id, course } => write!(
                f,
                "student {student_id} already has a grade for course `{course}`"
            ),
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
            Self::InvalidGrade(grade) => write!(f, "invalid grade: {grade}"),
        }
    }
}

impl Error for GradeBookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocError> for GradeBookError {
    fn from(value: AllocError) -> Self {
        Self::AllocationFailure(value)
    }
}

/// Owned result of an average query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    /// Independent copy of the student's display name.
    pub name: String,
    /// Raw arithmetic mean; `0.0` when no course is recorded.
    pub average: f64,
}

/// In-memory collection of students and their course grades.
#[derive(Debug, Default, Serialize)]
pub struct GradeBook {
    students: Sequence<StudentRecord>,
}

impl GradeBook {
    /// Creates an empty grade book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new student with no courses.
    ///
    /// # Errors
    /// - `DuplicateStudent` when `id` is already registered.
    /// - `AllocationFailure` when the record cannot be stored.
    pub fn add_student(&mut self, name: &str, id: StudentId) -> GradeBookResult<()> {
        if self.student(id).is_some() {
            return Err(rejected(
                "add_student",
                id,
                GradeBookError::DuplicateStudent(id),
            ));
        }

        let student = StudentRecord::new(name, id)
            .map_err(|err| rejected("add_student", id, err.into()))?;
        self.students
            .append(&student)
            .map_err(|err| rejected("add_student", id, err.into()))?;

        debug!(
            "event=student_added module=grade_book status=ok id={} students={}",
            id,
            self.students.len()
        );
        Ok(())
    }

    /// Records `grade` for course `course_name` on student `id`.
    ///
    /// Checks run in order: grade range, student lookup, duplicate course.
    ///
    /// # Errors
    /// - `InvalidGrade` when `grade` is outside `[0, 100]`.
    /// - `StudentNotFound` when no student has `id`.
    /// - `DuplicateCourse` when the student already has `course_name`.
    /// - `AllocationFailure` when the course cannot be stored.
    pub fn add_grade(
        &mut self,
        course_name: &str,
        id: StudentId,
        grade: i32,
    ) -> GradeBookResult<()> {
        let course = CourseRecord::new(course_name, grade)
            .map_err(|err| rejected("add_grade", id, GradeBookError::from_record(id, err)))?;
        let student = match self.students.find_mut(|student| student.id() == id) {
            Some(student) => student,
            None => {
                return Err(rejected(
                    "add_grade",
                    id,
                    GradeBookError::StudentNotFound(id),
                ));
            }
        };
        student
            .add_course(&course)
            .map_err(|err| rejected("add_grade", id, GradeBookError::from_record(id, err)))?;

        debug!(
            "event=grade_added module=grade_book status=ok id={} courses={}",
            id,
            student.courses().len()
        );
        Ok(())
    }

    /// Computes the raw mean grade of student `id`.
    ///
    /// The returned name is an owned copy, independent of the book.
    pub fn calc_avg(&self, id: StudentId) -> GradeBookResult<StudentAverage> {
        let student = self.require_student("calc_avg", id)?;
        let name =
            copy_text(student.name()).map_err(|err| rejected("calc_avg", id, err.into()))?;
        Ok(StudentAverage {
            name,
            average: student.average(),
        })
    }

    /// Renders one student as `<name> <id>: <course> <grade>, ...\n`.
    pub fn print_student(&self, id: StudentId) -> GradeBookResult<String> {
        let student = self.require_student("print_student", id)?;
        Ok(student.to_string())
    }

    /// Renders every student in insertion order.
    pub fn print_all(&self) -> String {
        self.students.iter().map(ToString::to_string).collect()
    }

    /// Looks up one student by id.
    pub fn student(&self, id: StudentId) -> Option<&StudentRecord> {
        self.students.find(|student| student.id() == id)
    }

    pub fn students(&self) -> Iter<'_, StudentRecord> {
        self.students.iter()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of courses recorded for `id`, or `None` for unknown ids.
    pub fn course_count(&self, id: StudentId) -> Option<usize> {
        self.student(id).map(|student| student.courses().len())
    }

    fn require_student(
        &self,
        operation: &'static str,
        id: StudentId,
    ) -> GradeBookResult<&StudentRecord> {
        self.student(id)
            .ok_or_else(|| rejected(operation, id, GradeBookError::StudentNotFound(id)))
    }
}

fn rejected(operation: &'static str, id: StudentId, err: GradeBookError) -> GradeBookError {
    warn!(
        "event=operation_rejected module=grade_book status=error op={} id={} kind={}",
        operation,
        id,
        err.kind().as_str()
    );
    err
}
