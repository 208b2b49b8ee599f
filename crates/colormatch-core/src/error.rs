//! Error types for colormatch-core
//!
//! Catalogue construction is the only fallible operation in this crate.
//! A match that finds nothing is a normal return value, not an error.

use thiserror::Error;

/// colormatch-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// The catalogue source yielded no entries. An empty catalogue would
    /// make every subsequent match fail silently, so it is rejected at
    /// construction instead.
    #[error("catalogue contains no entries")]
    EmptyCatalogue,
}

/// Result type alias for colormatch-core operations
pub type Result<T> = std::result::Result<T, Error>;
