//! Generic owned containers used by the record model.
//!
//! # Responsibility
//! - Provide the value-owning `Sequence` and its borrow-tied `Cursor`.
//!
//! # Invariants
//! - Containers never alias caller memory after an insert returns.

pub mod sequence;
