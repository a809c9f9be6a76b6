//! Raster decoding for user-supplied puzzle images.

use eframe::egui::ColorImage;
use image::DynamicImage;

/// Longest edge a puzzle source is allowed to keep. Larger uploads are
/// downscaled before play so piece cutting stays cheap.
pub const MAX_DIMENSION: u32 = 1600;

/// Why an uploaded image could not be turned into a puzzle source.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ImageLoadError {
    /// The bytes were not a decodable raster image.
    #[display("could not decode image: {_0}")]
    Decode(image::ImageError),
    /// The image decoded to zero pixels.
    #[display("image has no pixels")]
    Empty,
}

/// Decodes raw file bytes into an RGBA [`ColorImage`], downscaling
/// anything larger than [`MAX_DIMENSION`] on its longest edge.
pub fn decode_puzzle_image(bytes: &[u8]) -> Result<ColorImage, ImageLoadError> {
    let decoded = image::load_from_memory(bytes).map_err(ImageLoadError::Decode)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(ImageLoadError::Empty);
    }

    let scaled = if decoded.width().max(decoded.height()) > MAX_DIMENSION {
        log::info!(
            "downscaling upload from {}x{} to fit {MAX_DIMENSION}",
            decoded.width(),
            decoded.height()
        );
        decoded.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        decoded
    };

    Ok(color_image_from_dynamic(&scaled))
}

fn color_image_from_dynamic(image: &DynamicImage) -> ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, RgbaImage};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 0x40, 0xff])
        });
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_at_original_size() {
        let image = decode_puzzle_image(&png_bytes(320, 200)).unwrap();
        assert_eq!(image.size, [320, 200]);
    }

    #[test]
    fn oversized_images_are_downscaled() {
        let image = decode_puzzle_image(&png_bytes(MAX_DIMENSION * 2, 400)).unwrap();
        assert!(image.size[0] <= MAX_DIMENSION as usize);
        assert!(image.size[1] <= MAX_DIMENSION as usize);
        // Aspect ratio survives the downscale.
        assert_eq!(image.size[0] / image.size[1], 8);
    }

    #[test]
    fn garbage_bytes_report_a_decode_error() {
        let err = decode_puzzle_image(b"not an image").unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }
}
