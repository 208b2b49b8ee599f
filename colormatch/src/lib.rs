//! colormatch - Named-color catalogue matching
//!
//! Resolves a sampled pixel to the entry of a named color catalogue that
//! matches it exactly or approximately, under a caller-supplied
//! per-channel tolerance.
//!
//! # Overview
//!
//! - Build a [`Catalogue`] from in-memory entries or load one from its
//!   persisted JSON form with [`io::read_catalogue_from_file`]
//! - Hand it to a [`Matcher`]; an exact hit answers from a packed-key
//!   index in O(1), and fuzzy lookups prune the search space through a
//!   channel-sum bucket index before scoring candidates
//! - Sample pixels out of decoded images with [`io::sample_pixel`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use colormatch::{Catalogue, Matcher, Rgb};
//!
//! let catalogue = Arc::new(
//!     Catalogue::from_entries([
//!         ("teal".to_string(), Rgb::new(0, 98, 110)),
//!         ("cream".to_string(), Rgb::new(255, 253, 208)),
//!     ])
//!     .unwrap(),
//! );
//! let matcher = Matcher::new(catalogue);
//!
//! // Every channel is within 2 of "teal".
//! let matched = matcher.match_pixel(Rgb::new(2, 96, 112), 2).unwrap();
//! assert_eq!(matched.name, "teal");
//! ```

// Re-export core types (the matching engine used everywhere)
pub use colormatch_core::*;

// Re-export the boundary I/O crate as a module
pub use colormatch_io as io;
