//! # wordsmith-core
//!
//! Core crate for Wordsmith. Contains traits, configuration schemas,
//! typed identifiers, the filter/pagination/sorting table-query types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Wordsmith crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
