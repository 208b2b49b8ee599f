//! Sample-point configuration
//!
//! The core does not own the sample coordinates or the tolerance; the
//! hosting boundary supplies them. [`SampleOptions`] is the deserialized
//! form of that configuration section, and [`match_image_pixel`] is the
//! sample-then-match orchestration a boundary performs around the core.

use image::DynamicImage;
use serde::Deserialize;

use colormatch_core::{ColorEntry, Matcher};

use crate::error::IoResult;
use crate::pixel::sample_pixel;

/// Where to sample an image and how much per-channel tolerance to allow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SampleOptions {
    /// X position of the pixel to be color sampled
    #[serde(default, alias = "X", alias = "color_match_pixel_x")]
    pub x: u32,
    /// Y position of the pixel to be color sampled
    #[serde(default, alias = "Y", alias = "color_match_pixel_y")]
    pub y: u32,
    /// Maximum allowed absolute per-channel deviation for a fuzzy match
    #[serde(default, alias = "Fuzziness", alias = "rgb_fuzziness")]
    pub fuzziness: u32,
}

/// Sample the configured pixel from `image` and match it against the
/// matcher's catalogue.
///
/// Out-of-bounds coordinates are an error; a pixel that matches nothing
/// is `Ok(None)`.
pub fn match_image_pixel(
    matcher: &Matcher,
    image: &DynamicImage,
    options: SampleOptions,
) -> IoResult<Option<ColorEntry>> {
    let pixel = sample_pixel(image, options.x, options.y)?;
    Ok(matcher.match_pixel(pixel, options.fuzziness).cloned())
}
