//! Image decoding and pixel sampling
//!
//! The matching core consumes a single RGB triple; these helpers get it
//! out of an encoded image. Decoding is delegated to the `image` crate
//! with the format guessed from the byte content.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError};

use colormatch_core::Rgb;

use crate::error::{IoError, IoResult};

/// Decode an image from raw bytes, guessing the format from the content.
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<DynamicImage> {
    image::load_from_memory(data).map_err(decode_error)
}

/// Decode an image from a file.
pub fn read_image_from_file(path: impl AsRef<Path>) -> IoResult<DynamicImage> {
    image::open(path.as_ref()).map_err(decode_error)
}

/// Sample the RGB value of the pixel at `(x, y)`.
///
/// The alpha channel is discarded; the catalogue stores opaque colors.
pub fn sample_pixel(image: &DynamicImage, x: u32, y: u32) -> IoResult<Rgb> {
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(IoError::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    let image::Rgba([red, green, blue, _alpha]) = image.get_pixel(x, y);
    Ok(Rgb::new(red, green, blue))
}

fn decode_error(err: ImageError) -> IoError {
    match err {
        ImageError::IoError(e) => IoError::Io(e),
        other => IoError::DecodeError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(r: u8, g: u8, b: u8, w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(w, h, image::Rgb([r, g, b])))
    }

    #[test]
    fn test_sample_pixel() {
        let img = solid_image(0, 98, 110, 4, 4);
        assert_eq!(sample_pixel(&img, 0, 0).unwrap(), Rgb::new(0, 98, 110));
        assert_eq!(sample_pixel(&img, 3, 3).unwrap(), Rgb::new(0, 98, 110));
    }

    #[test]
    fn test_sample_pixel_out_of_bounds() {
        let img = solid_image(1, 2, 3, 4, 4);
        let result = sample_pixel(&img, 4, 0);
        assert!(matches!(
            result,
            Err(IoError::PixelOutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            })
        ));
    }

    #[test]
    fn test_decode_roundtrip() {
        let img = solid_image(12, 34, 56, 2, 2);
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let decoded = read_image_from_bytes(&bytes).unwrap();
        assert_eq!(sample_pixel(&decoded, 1, 1).unwrap(), Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_decode_garbage_is_an_error() {
        let result = read_image_from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
