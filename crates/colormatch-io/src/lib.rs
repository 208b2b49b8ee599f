//! colormatch-io - Boundary I/O for the colormatch library
//!
//! The matching core works on values that already live in memory; this
//! crate supplies them:
//!
//! - [`catalogue`] - Parse the persisted JSON catalogue into a
//!   [`colormatch_core::Catalogue`]
//! - [`pixel`] - Decode image bytes and sample single pixels
//! - [`options`] - Sample-point configuration and the sample-then-match
//!   convenience entry point
//!
//! All failures surface as [`IoError`]; a catalogue that cannot be
//! parsed is an error, never silently replaced by an empty one.

pub mod catalogue;
pub mod error;
pub mod options;
pub mod pixel;

pub use catalogue::{
    ColorDef, read_catalogue_from_bytes, read_catalogue_from_file, read_catalogue_from_reader,
    read_catalogue_from_str,
};
pub use error::{IoError, IoResult};
pub use options::{SampleOptions, match_image_pixel};
pub use pixel::{read_image_from_bytes, read_image_from_file, sample_pixel};
