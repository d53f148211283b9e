//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod classification;

pub use classification::{ClassificationOutcome, ClassifyProjectCommand, ClassifyProjectHandler};
