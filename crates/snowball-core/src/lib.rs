//! Shared types for the Snowball stemming workspace.
//!
//! - [`character`] -- Locale-invariant case folding applied before stemming
//! - [`algorithm`] -- Language identifiers and language-code parsing

pub mod algorithm;
pub mod character;

pub use algorithm::{Algorithm, UnknownLanguage};
