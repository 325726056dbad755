//! Domain layer for the StudyNotes platform.
//!
//! Pure types, validation, and parsing shared by the repository and API
//! layers. This crate performs no I/O.

pub mod error;
pub mod identity;
pub mod notes;
pub mod types;
pub mod video;
