//! Snowball stemmers.
//!
//! - [`handle`] -- The [`Stemmer`] handle: language selection, case folding, `stem`
//! - [`norwegian`] -- Norwegian rule tables and rule program (feature `norwegian`)
//!
//! ```
//! use snowball_lang::Stemmer;
//!
//! let stemmer = Stemmer::for_language("no").unwrap();
//! assert_eq!(stemmer.stem("Katten"), "katt");
//! ```

pub mod handle;
#[cfg(feature = "norwegian")]
pub mod norwegian;

pub use handle::{Stemmer, StemmerError};
pub use snowball_core::Algorithm;
