//! SACRM - Strategix Africa Credit Rating Model
//!
//! This library provides:
//! - Sovereign and sector reference tables, overridable from JSON
//! - Financial profile loading and validation from CSV or JSON
//! - The five SACRM sub-score calculators
//! - Composite score, letter grade and probability of default

pub mod error;
pub mod reference;
pub mod profile;
pub mod scoring;

// Re-export commonly used types
pub use error::{ProfileError, TableError};
pub use profile::{FinancialProfile, Flag, ProfileRecord};
pub use reference::{ReferenceTables, TableOverrides};
pub use scoring::{Grade, RatedCompany, RatingEngine, RatingResult};
