//! Sector enum representing the closed set of project sectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The 10 project sectors, declared in tie-break order.
///
/// `Other` is the catch-all: it has no keywords and is only ever assigned
/// when no other sector scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    Health,
    Education,
    Infrastructure,
    Environment,
    DisasterRelief,
    EconomicDevelopment,
    SocialServices,
    Technology,
    Agriculture,
    Other,
}

impl Sector {
    /// Number of sectors.
    pub const COUNT: usize = 10;

    /// Returns all sectors in canonical (tie-break) order.
    pub fn all() -> &'static [Sector; Sector::COUNT] {
        &[
            Sector::Health,
            Sector::Education,
            Sector::Infrastructure,
            Sector::Environment,
            Sector::DisasterRelief,
            Sector::EconomicDevelopment,
            Sector::SocialServices,
            Sector::Technology,
            Sector::Agriculture,
            Sector::Other,
        ]
    }

    /// Returns the 0-based index of this sector in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            Sector::Health => 0,
            Sector::Education => 1,
            Sector::Infrastructure => 2,
            Sector::Environment => 3,
            Sector::DisasterRelief => 4,
            Sector::EconomicDevelopment => 5,
            Sector::SocialServices => 6,
            Sector::Technology => 7,
            Sector::Agriculture => 8,
            Sector::Other => 9,
        }
    }

    /// Returns true for the fallback sector.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sector::Other)
    }

    /// Returns the kebab-case identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Sector::Health => "health",
            Sector::Education => "education",
            Sector::Infrastructure => "infrastructure",
            Sector::Environment => "environment",
            Sector::DisasterRelief => "disaster-relief",
            Sector::EconomicDevelopment => "economic-development",
            Sector::SocialServices => "social-services",
            Sector::Technology => "technology",
            Sector::Agriculture => "agriculture",
            Sector::Other => "other",
        }
    }

    /// Returns the display label: capitalized slug with hyphens as spaces.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Health => "Health",
            Sector::Education => "Education",
            Sector::Infrastructure => "Infrastructure",
            Sector::Environment => "Environment",
            Sector::DisasterRelief => "Disaster relief",
            Sector::EconomicDevelopment => "Economic development",
            Sector::SocialServices => "Social services",
            Sector::Technology => "Technology",
            Sector::Agriculture => "Agriculture",
            Sector::Other => "Other",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Sector {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sector::all()
            .iter()
            .copied()
            .find(|sector| sector.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::unknown_sector(wanted))
    }
}
