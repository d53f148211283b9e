//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Unknown sector '{value}'")]
    UnknownSector { value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an unknown sector validation error.
    pub fn unknown_sector(value: impl Into<String>) -> Self {
        ValidationError::UnknownSector {
            value: value.into(),
        }
    }

    /// Returns the offending field name, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyField { field } => Some(field.as_str()),
            ValidationError::UnknownSector { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
    }

    #[test]
    fn validation_error_unknown_sector_displays_correctly() {
        let err = ValidationError::unknown_sector("mining");
        assert_eq!(format!("{}", err), "Unknown sector 'mining'");
    }

    #[test]
    fn field_is_reported_for_empty_field_only() {
        assert_eq!(ValidationError::empty_field("description").field(), Some("description"));
        assert_eq!(ValidationError::unknown_sector("x").field(), None);
    }
}
