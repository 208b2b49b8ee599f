//! I/O error types
//!
//! Provides a unified error type for catalogue loading and pixel
//! sampling. Each source of failure maps into one `IoError` variant so
//! that callers only need to handle one error type.

use thiserror::Error;

/// Error type for colormatch I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalogue source is not valid JSON or not the expected shape
    #[error("malformed catalogue: {0}")]
    MalformedCatalogue(String),

    /// The catalogue source exceeds the input size cap
    #[error("catalogue input too large: exceeds {limit} bytes")]
    InputTooLarge { limit: usize },

    /// The image bytes could not be decoded
    #[error("image decode error: {0}")]
    DecodeError(String),

    /// The sample coordinates lie outside the decoded image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// An error from the matching core (e.g. an empty catalogue)
    #[error("core error: {0}")]
    Core(#[from] colormatch_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
