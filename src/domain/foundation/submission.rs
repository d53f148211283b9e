//! ProjectSubmission value object - a title/description pair ready to classify.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A project as entered by a user: both fields must contain non-whitespace text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    title: String,
    description: String,
}

impl ProjectSubmission {
    /// Creates a submission, rejecting a blank title or description.
    ///
    /// The title is checked first, so a submission with both fields blank
    /// reports `title`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        Ok(Self { title, description })
    }

    /// Returns the title as entered.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description as entered.
    pub fn description(&self) -> &str {
        &self.description
    }
}
