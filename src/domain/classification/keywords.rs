//! Keyword table - per-sector keyword phrases compiled into word-boundary patterns.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

use crate::domain::foundation::Sector;

/// Keyword phrases per sector, in tie-break order.
///
/// `Other` is deliberately absent: it is only ever assigned as the fallback.
/// Some phrases (`agriculture`, `farming`) are listed under two sectors and
/// score for both. `livestock` is listed twice under agriculture, so each
/// occurrence scores 2 there.
pub const SECTOR_KEYWORDS: &[(Sector, &[&str])] = &[
    (
        Sector::Health,
        &[
            "medical",
            "health",
            "hospital",
            "clinic",
            "doctor",
            "nurse",
            "medicine",
            "healthcare",
            "vaccination",
            "maternal",
            "child health",
            "mental health",
            "disease",
            "treatment",
            "medical equipment",
            "health center",
            "pharmacy",
            "ambulance",
            "emergency medical",
        ],
    ),
    (
        Sector::Education,
        &[
            "school",
            "education",
            "student",
            "teacher",
            "learning",
            "classroom",
            "library",
            "university",
            "college",
            "training",
            "literacy",
            "curriculum",
            "textbook",
            "scholarship",
            "tuition",
            "academic",
            "educational",
            "teaching",
            "study",
        ],
    ),
    (
        Sector::Infrastructure,
        &[
            "road",
            "bridge",
            "building",
            "construction",
            "infrastructure",
            "water system",
            "electricity",
            "power",
            "sewer",
            "drainage",
            "transportation",
            "public works",
            "facility",
            "development",
            "engineering",
            "utilities",
            "telecommunications",
        ],
    ),
    (
        Sector::Environment,
        &[
            "environment",
            "climate",
            "conservation",
            "renewable",
            "solar",
            "wind",
            "clean energy",
            "pollution",
            "waste management",
            "recycling",
            "sustainability",
            "green",
            "ecology",
            "forest",
            "wildlife",
            "biodiversity",
            "carbon",
            "emissions",
        ],
    ),
    (
        Sector::DisasterRelief,
        &[
            "disaster",
            "emergency",
            "relief",
            "earthquake",
            "flood",
            "hurricane",
            "typhoon",
            "rescue",
            "evacuation",
            "shelter",
            "aid",
            "crisis",
            "response",
            "recovery",
            "preparedness",
            "mitigation",
            "vulnerability",
            "risk reduction",
        ],
    ),
    (
        Sector::EconomicDevelopment,
        &[
            "economic",
            "business",
            "entrepreneur",
            "job",
            "employment",
            "income",
            "microfinance",
            "loan",
            "credit",
            "investment",
            "market",
            "trade",
            "commerce",
            "industry",
            "manufacturing",
            "agriculture",
            "farming",
            "livelihood",
            "poverty reduction",
        ],
    ),
    (
        Sector::SocialServices,
        &[
            "social",
            "community",
            "welfare",
            "support",
            "care",
            "elderly",
            "children",
            "family",
            "counseling",
            "therapy",
            "rehabilitation",
            "integration",
            "advocacy",
            "rights",
            "protection",
            "safety",
            "domestic violence",
            "homeless",
            "refugee",
        ],
    ),
    (
        Sector::Technology,
        &[
            "technology",
            "digital",
            "computer",
            "internet",
            "software",
            "app",
            "website",
            "coding",
            "programming",
            "IT",
            "data",
            "information",
            "communication",
            "mobile",
            "online",
            "cyber",
            "tech",
            "innovation",
            "startup",
            "digital literacy",
        ],
    ),
    (
        Sector::Agriculture,
        &[
            "agriculture",
            "farming",
            "crop",
            "livestock",
            "food",
            "nutrition",
            "irrigation",
            "fertilizer",
            "seed",
            "harvest",
            "rural",
            "village",
            "farmer",
            "agricultural",
            "food security",
            "sustainable farming",
            "organic",
            "livestock",
            "dairy",
        ],
    ),
];

static BUILTIN: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_phrases(SECTOR_KEYWORDS).expect("built-in keyword table must compile")
});

/// Errors raised while building a keyword table.
#[derive(Debug, Error)]
pub enum KeywordTableError {
    #[error("Sector '{0}' has no keywords")]
    EmptyKeywordList(Sector),

    #[error("Sector '{0}' is listed more than once")]
    DuplicateSector(Sector),

    #[error("The fallback sector cannot have keywords")]
    FallbackHasKeywords,

    #[error("Keyword '{phrase}' cannot be compiled: {source}")]
    InvalidPattern {
        phrase: String,
        #[source]
        source: regex_lite::Error,
    },
}

/// A single keyword phrase and its compiled matcher.
#[derive(Debug, Clone)]
pub struct Keyword {
    phrase: String,
    pattern: Regex,
}

impl Keyword {
    /// Compiles a phrase into a case-insensitive whole-word pattern.
    ///
    /// Word boundaries are ASCII: only `[A-Za-z0-9_]` count as word characters.
    pub fn new(phrase: impl Into<String>) -> Result<Self, KeywordTableError> {
        let phrase = phrase.into();
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(&phrase)))
            .map_err(|source| KeywordTableError::InvalidPattern {
                phrase: phrase.clone(),
                source,
            })?;

        Ok(Self { phrase, pattern })
    }

    /// Returns the phrase as declared.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Counts non-overlapping whole-word occurrences in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Immutable mapping from sector to its keyword phrases.
///
/// Indexed by [`Sector::order_index`], so iteration always follows the
/// tie-break order regardless of how the table was declared.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    keywords: [Vec<Keyword>; Sector::COUNT],
}

impl KeywordTable {
    /// Returns the process-wide built-in table, compiled on first use.
    pub fn builtin() -> &'static KeywordTable {
        &BUILTIN
    }

    /// Builds a table from `(sector, phrases)` pairs.
    ///
    /// Every sector except `Other` must appear exactly once with at least one
    /// phrase; `Other` may be omitted or listed with no phrases.
    pub fn from_phrases(entries: &[(Sector, &[&str])]) -> Result<Self, KeywordTableError> {
        let mut keywords: [Vec<Keyword>; Sector::COUNT] = std::array::from_fn(|_| Vec::new());
        let mut seen = [false; Sector::COUNT];

        for (sector, phrases) in entries {
            let idx = sector.order_index();
            if seen[idx] {
                return Err(KeywordTableError::DuplicateSector(*sector));
            }
            seen[idx] = true;

            if sector.is_fallback() {
                if !phrases.is_empty() {
                    return Err(KeywordTableError::FallbackHasKeywords);
                }
                continue;
            }

            keywords[idx] = phrases
                .iter()
                .map(|phrase| Keyword::new(*phrase))
                .collect::<Result<Vec<_>, _>>()?;
        }

        if let Some(sector) = Sector::all()
            .iter()
            .find(|s| !s.is_fallback() && keywords[s.order_index()].is_empty())
        {
            return Err(KeywordTableError::EmptyKeywordList(*sector));
        }

        Ok(Self { keywords })
    }

    /// Returns the keywords for a sector (empty for `Other`).
    pub fn keywords_for(&self, sector: Sector) -> &[Keyword] {
        &self.keywords[sector.order_index()]
    }

    /// Iterates sectors with their keywords in tie-break order, skipping `Other`.
    pub fn iter(&self) -> impl Iterator<Item = (Sector, &[Keyword])> {
        Sector::all()
            .iter()
            .filter(|s| !s.is_fallback())
            .map(move |s| (*s, self.keywords_for(*s)))
    }

    /// Total number of keyword phrases across all sectors.
    pub fn len(&self) -> usize {
        self.keywords.iter().map(Vec::len).sum()
    }

    /// Always false for a successfully built table.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
