//! Core use-case services.
//!
//! # Responsibility
//! - Compose record-level operations into the grade book API used by shells.
//! - Keep console/CLI layers free of lookup and validation rules.

pub mod grade_book;
