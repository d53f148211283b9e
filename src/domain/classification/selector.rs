//! Sector selector - arg-max over scores with a fixed tie-break.

use super::SectorScores;
use crate::domain::foundation::Sector;

/// Picks the winning sector.
///
/// Returns `Other` when every score is zero. Otherwise returns the highest
/// scoring sector; ties go to the sector declared first in [`Sector::all`].
pub fn select(scores: &SectorScores) -> Sector {
    let max = scores.max();
    if max == 0 {
        return Sector::Other;
    }

    scores
        .iter()
        .find(|(_, score)| *score == max)
        .map(|(sector, _)| sector)
        .unwrap_or(Sector::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(entries: &[(Sector, usize)]) -> SectorScores {
        let mut scores = SectorScores::default();
        for (sector, count) in entries {
            scores.add(*sector, *count);
        }
        scores
    }

    #[test]
    fn all_zero_falls_back_to_other() {
        assert_eq!(select(&SectorScores::default()), Sector::Other);
    }

    #[test]
    fn single_match_wins() {
        let scores = scores_of(&[(Sector::Agriculture, 1)]);
        assert_eq!(select(&scores), Sector::Agriculture);
    }

    #[test]
    fn highest_score_wins_regardless_of_order() {
        let scores = scores_of(&[(Sector::Health, 2), (Sector::Technology, 5)]);
        assert_eq!(select(&scores), Sector::Technology);
    }

    #[test]
    fn tie_goes_to_earlier_declared_sector() {
        let scores = scores_of(&[(Sector::Education, 1), (Sector::Health, 1)]);
        assert_eq!(select(&scores), Sector::Health);
    }

    #[test]
    fn tie_is_not_alphabetical() {
        // Alphabetically "agriculture" < "economic-development".
        let scores = scores_of(&[(Sector::Agriculture, 3), (Sector::EconomicDevelopment, 3)]);
        assert_eq!(select(&scores), Sector::EconomicDevelopment);
    }

    #[test]
    fn three_way_tie_picks_first() {
        let scores = scores_of(&[
            (Sector::Agriculture, 2),
            (Sector::Environment, 2),
            (Sector::SocialServices, 2),
        ]);
        assert_eq!(select(&scores), Sector::Environment);
    }
}
