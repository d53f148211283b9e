//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (sectors, submissions, errors)
//! - `classification` - Pure keyword-frequency sector classification

pub mod classification;
pub mod foundation;
