//! Core domain logic for the grade book.
//! This crate owns every record invariant; shells only parse and print.

pub mod collections;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use collections::sequence::{AllocError, Cursor, DeepCopy, Sequence};
pub use config::LoggingConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::course::CourseRecord;
pub use model::student::{StudentId, StudentRecord};
pub use model::{RecordError, MAX_GRADE, MIN_GRADE};
pub use service::grade_book::{
    ErrorKind, GradeBook, GradeBookError, GradeBookResult, StudentAverage,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
