//! ClassifyProjectHandler - Command handler for classifying a project into a sector.

use tracing::{debug, info};

use crate::domain::classification::{select, SectorClassifier, SectorInfo};
use crate::domain::foundation::{ProjectSubmission, ValidationError};

/// Command to classify a project from its title and description.
#[derive(Debug, Clone)]
pub struct ClassifyProjectCommand {
    pub title: String,
    pub description: String,
}

/// Result of a classification: the chosen sector with its display metadata.
pub type ClassificationOutcome = SectorInfo;

/// Handler for classifying projects.
///
/// Rejects blank titles or descriptions before classifying; the classifier
/// itself accepts anything.
pub struct ClassifyProjectHandler {
    classifier: SectorClassifier<'static>,
}

impl Default for ClassifyProjectHandler {
    fn default() -> Self {
        Self::new(SectorClassifier::builtin())
    }
}

impl ClassifyProjectHandler {
    pub fn new(classifier: SectorClassifier<'static>) -> Self {
        Self { classifier }
    }

    pub fn handle(
        &self,
        cmd: ClassifyProjectCommand,
    ) -> Result<ClassificationOutcome, ValidationError> {
        // 1. Validate input
        let submission = ProjectSubmission::new(cmd.title, cmd.description)?;

        // 2. Score
        let scores = self
            .classifier
            .scores(submission.title(), submission.description());
        debug!(
            title_len = submission.title().len(),
            description_len = submission.description().len(),
            total_matches = scores.total(),
            scores = ?scores.iter().filter(|(_, s)| *s > 0).collect::<Vec<_>>(),
            "Project scored"
        );

        // 3. Select
        let sector = select(&scores);
        info!(sector = %sector, top_score = scores.max(), "Project classified");

        Ok(SectorInfo::of(sector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Sector;

    fn command(title: &str, description: &str) -> ClassifyProjectCommand {
        ClassifyProjectCommand {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn classifies_valid_submission() {
        let handler = ClassifyProjectHandler::default();
        let outcome = handler
            .handle(command(
                "Mobile Health Clinic for Rural Communities",
                "A doctor and a nurse visit remote areas with medicine",
            ))
            .unwrap();

        assert_eq!(outcome.sector, Sector::Health);
        assert_eq!(outcome.label, "Health");
        assert_eq!(outcome.icon, "🏥");
        assert_eq!(
            outcome.description,
            "Projects focused on healthcare, medical services, and public health initiatives"
        );
    }

    #[test]
    fn unmatched_text_yields_other() {
        let handler = ClassifyProjectHandler::default();
        let outcome = handler.handle(command("Painting", "Murals on walls")).unwrap();

        assert_eq!(outcome.sector, Sector::Other);
        assert_eq!(outcome.icon, "📋");
    }

    #[test]
    fn rejects_blank_title() {
        let handler = ClassifyProjectHandler::default();
        let err = handler.handle(command("  ", "A school")).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("title"));
    }

    #[test]
    fn rejects_blank_description() {
        let handler = ClassifyProjectHandler::default();
        let err = handler.handle(command("School", "")).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("description"));
    }

    #[test]
    fn outcome_serializes_for_display() {
        let handler = ClassifyProjectHandler::default();
        let outcome = handler
            .handle(command("Flood Shelter", "Evacuation and rescue"))
            .unwrap();

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["sector"], "disaster-relief");
        assert_eq!(json["label"], "Disaster relief");
        assert_eq!(json["icon"], "🚨");
    }
}
