//! Sector Classifier - Keyword-based project sector classification
//!
//! This crate classifies a project, given its title and description, into
//! exactly one sector of a closed taxonomy by counting whole-word keyword
//! occurrences per sector.
//!
//! ```
//! use sector_classifier::{classify, describe_sector, icon_for, Sector};
//!
//! let sector = classify("Village Clinic", "A clinic staffed by a nurse");
//! assert_eq!(sector, Sector::Health);
//! assert_eq!(icon_for(sector), "🏥");
//! assert!(!describe_sector(sector).is_empty());
//! ```

pub mod application;
pub mod config;
pub mod domain;

pub use domain::classification::{classify, describe_sector, icon_for};
pub use domain::foundation::Sector;
