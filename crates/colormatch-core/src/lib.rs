//! colormatch-core - Named-color catalogue and nearest-color matcher
//!
//! This crate provides the matching core of the colormatch library:
//!
//! - [`Rgb`] - An 8-bit-per-channel RGB color with a packed index key
//! - [`Catalogue`] / [`ColorEntry`] - Immutable catalogue of named colors
//!   with an exact (packed-key) index and a bucketed (channel-sum) index
//! - [`Matcher`] - Resolves a sampled pixel to the catalogue entry it
//!   matches exactly or approximately, under a per-channel tolerance
//!
//! The catalogue is built once and shared read-only for its whole
//! lifetime; matching is a pure synchronous computation, so a single
//! catalogue behind an [`std::sync::Arc`] serves arbitrarily many
//! concurrent matchers without locking.

pub mod catalogue;
pub mod color;
pub mod error;
pub mod matcher;

pub use catalogue::{Catalogue, ColorEntry};
pub use color::Rgb;
pub use error::{Error, Result};
pub use matcher::Matcher;
