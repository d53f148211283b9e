//! Sector classifier - normalize, score, select.

use super::{normalize, score, select, KeywordTable, SectorScores};
use crate::domain::foundation::Sector;

/// Classifies project text against a keyword table.
///
/// Holds only a shared reference to an immutable table, so one classifier
/// can be used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct SectorClassifier<'a> {
    table: &'a KeywordTable,
}

impl SectorClassifier<'static> {
    /// Creates a classifier over the built-in keyword table.
    pub fn builtin() -> Self {
        Self::new(KeywordTable::builtin())
    }
}

impl Default for SectorClassifier<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> SectorClassifier<'a> {
    /// Creates a classifier over a custom keyword table.
    pub fn new(table: &'a KeywordTable) -> Self {
        Self { table }
    }

    /// Returns the keyword table in use.
    pub fn table(&self) -> &'a KeywordTable {
        self.table
    }

    /// Computes per-sector scores without selecting a winner.
    pub fn scores(&self, title: &str, description: &str) -> SectorScores {
        score(&normalize(title, description), self.table)
    }

    /// Classifies a project into exactly one sector.
    ///
    /// Never fails: blank input and text without any keyword yield `Other`.
    pub fn classify(&self, title: &str, description: &str) -> Sector {
        select(&self.scores(title, description))
    }
}

/// Classifies a project with the built-in keyword table.
pub fn classify(title: &str, description: &str) -> Sector {
    SectorClassifier::builtin().classify(title, description)
}
