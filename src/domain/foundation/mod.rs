//! Foundation module - Shared domain primitives.
//!
//! Contains the sector vocabulary, the validated project submission,
//! and the error types shared by the classification core.

mod errors;
mod sector;
mod submission;

pub use errors::ValidationError;
pub use sector::Sector;
pub use submission::ProjectSubmission;
