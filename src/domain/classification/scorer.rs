//! Keyword scorer - counts keyword occurrences per sector.

use serde::{ser::SerializeMap, Serialize, Serializer};
use tracing::trace;

use super::KeywordTable;
use crate::domain::foundation::Sector;

/// Per-sector keyword occurrence counts for one classification.
///
/// Created fresh for every call; `Other` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectorScores([usize; Sector::COUNT]);

impl SectorScores {
    /// Returns the score of one sector.
    pub fn get(&self, sector: Sector) -> usize {
        self.0[sector.order_index()]
    }

    /// Adds `count` matches to a sector.
    pub(crate) fn add(&mut self, sector: Sector, count: usize) {
        self.0[sector.order_index()] += count;
    }

    /// Sum of all sector scores.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Highest score over all sectors (0 when nothing matched).
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Iterates `(sector, score)` in tie-break order, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (Sector, usize)> + '_ {
        Sector::all().iter().map(move |s| (*s, self.get(*s)))
    }

    /// Sectors with a non-zero score, in tie-break order.
    pub fn matched_sectors(&self) -> Vec<Sector> {
        self.iter()
            .filter(|(_, score)| *score > 0)
            .map(|(sector, _)| sector)
            .collect()
    }
}

impl Serialize for SectorScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Sector::COUNT))?;
        for (sector, score) in self.iter() {
            map.serialize_entry(&sector, &score)?;
        }
        map.end()
    }
}

/// Scores normalized text against every keyword of every sector.
///
/// # Algorithm
/// For each sector S (except `Other`) and each keyword K of S:
/// `score[S] += occurrences(K)`, counting non-overlapping whole-word matches.
///
/// # Edge Cases
/// - Blank text: all scores are 0
/// - Overlapping phrases (`health` inside `mental health`): each phrase counts
///   independently
/// - Keywords shared by two sectors score for both
pub fn score(normalized: &str, table: &KeywordTable) -> SectorScores {
    let mut scores = SectorScores::default();

    for (sector, keywords) in table.iter() {
        for keyword in keywords {
            let count = keyword.count_in(normalized);
            if count > 0 {
                trace!(sector = %sector, keyword = keyword.phrase(), count, "Keyword matched");
                scores.add(sector, count);
            }
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_builtin(text: &str) -> SectorScores {
        score(text, KeywordTable::builtin())
    }

    #[test]
    fn blank_text_scores_zero_everywhere() {
        let scores = score_builtin(" ");
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.max(), 0);
        assert!(scores.matched_sectors().is_empty());
    }

    #[test]
    fn repeated_keyword_counts_each_occurrence() {
        let scores = score_builtin("health health health");
        assert_eq!(scores.get(Sector::Health), 3);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn overlapping_phrases_score_additively() {
        // "mental health" and "health" both match.
        let scores = score_builtin("mental health");
        assert_eq!(scores.get(Sector::Health), 2);
    }

    #[test]
    fn shared_keyword_scores_both_sectors() {
        let scores = score_builtin("farming");
        assert_eq!(scores.get(Sector::EconomicDevelopment), 1);
        assert_eq!(scores.get(Sector::Agriculture), 1);
        assert_eq!(
            scores.matched_sectors(),
            vec![Sector::EconomicDevelopment, Sector::Agriculture]
        );
    }

    #[test]
    fn other_is_never_scored() {
        let scores = score_builtin("other misc general health school road");
        assert_eq!(scores.get(Sector::Other), 0);
    }

    #[test]
    fn substring_does_not_count() {
        let scores = score_builtin("technologies are evolving");
        assert_eq!(scores.get(Sector::Technology), 0);
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn livestock_scores_twice_for_agriculture() {
        let scores = score_builtin("livestock market");
        assert_eq!(scores.get(Sector::Agriculture), 2);
        assert_eq!(scores.get(Sector::EconomicDevelopment), 1);
    }

    #[test]
    fn pronoun_it_counts_for_technology() {
        let scores = score_builtin("we built it");
        assert_eq!(scores.get(Sector::Technology), 1);
    }

    #[test]
    fn emergency_medical_scores_two_sectors() {
        let scores = score_builtin("emergency medical team");
        // "emergency medical" + "medical"
        assert_eq!(scores.get(Sector::Health), 2);
        // "emergency"
        assert_eq!(scores.get(Sector::DisasterRelief), 1);
    }

    #[test]
    fn iter_yields_all_sectors_in_order() {
        let scores = score_builtin("school");
        let listed: Vec<(Sector, usize)> = scores.iter().collect();
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0], (Sector::Health, 0));
        assert_eq!(listed[1], (Sector::Education, 1));
        assert_eq!(listed[9], (Sector::Other, 0));
    }

    #[test]
    fn serializes_as_slug_keyed_map() {
        let scores = score_builtin("clinic clinic");
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["health"], 2);
        assert_eq!(json["disaster-relief"], 0);
        assert_eq!(json["other"], 0);
    }
}
