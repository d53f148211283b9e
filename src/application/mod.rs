//! Application layer - Commands and Handlers.
//!
//! This layer validates caller input and orchestrates the pure domain
//! classification pipeline, adding logging around it.

pub mod handlers;

pub use handlers::{ClassificationOutcome, ClassifyProjectCommand, ClassifyProjectHandler};
