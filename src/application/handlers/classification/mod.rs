//! Classification handlers.

mod classify_project;

pub use classify_project::{ClassificationOutcome, ClassifyProjectCommand, ClassifyProjectHandler};
