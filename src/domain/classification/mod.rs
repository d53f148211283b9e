//! Classification Module - Keyword-frequency sector classification.
//!
//! The whole pipeline is pure and stateless:
//!
//! normalize -> score -> select -> (optionally) describe / icon lookup
//!
//! # Components
//!
//! - `normalize` - Lowercases `title + " " + description`
//! - `KeywordTable` - Immutable per-sector keyword phrases, compiled once
//! - `score` - Counts whole-word keyword occurrences into `SectorScores`
//! - `select` - Arg-max with declaration-order tie-break, `Other` on no match
//! - `describe_sector` / `icon_for` - Static metadata tables
//! - `SectorClassifier` / `classify` - The public entry points
//!
//! The only shared state is the keyword table and the metadata tables, all
//! read-only after initialization, so classification needs no locking.

mod classifier;
mod keywords;
mod metadata;
mod normalizer;
mod scorer;
mod selector;

pub use classifier::{classify, SectorClassifier};
pub use keywords::{Keyword, KeywordTable, KeywordTableError, SECTOR_KEYWORDS};
pub use metadata::{catalog, describe_sector, icon_for, SectorInfo};
pub use normalizer::normalize;
pub use scorer::{score, SectorScores};
pub use selector::select;
