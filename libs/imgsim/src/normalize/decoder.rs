use image::imageops;

use super::types::{PixelGrid, ResampleFilter, GRID_HEIGHT, GRID_WIDTH};
use crate::common::NormalizeError;

/// Turns encoded image bytes into a [`PixelGrid`].
///
/// Implementations must stretch the image to fill the grid rather than keep
/// its aspect ratio.
pub trait ImageDecoder: Send + Sync {
    fn decode_and_resample(&self, bytes: &[u8]) -> Result<PixelGrid, NormalizeError>;
}

/// Decoder backed by the `image` crate. Only the first frame of animated
/// formats is used.
#[derive(Clone, Debug, Default)]
pub struct ResizeDecoder {
    filter: ResampleFilter,
}

impl ResizeDecoder {
    pub fn new(filter: ResampleFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }
}

impl ImageDecoder for ResizeDecoder {
    fn decode_and_resample(&self, bytes: &[u8]) -> Result<PixelGrid, NormalizeError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| NormalizeError::Decode(e.to_string()))?;

        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(NormalizeError::Decode(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }
        log::debug!(
            "Decoded {}x{} image, resampling to {}x{} with {} filter",
            width,
            height,
            GRID_WIDTH,
            GRID_HEIGHT,
            self.filter
        );

        let rgba = image.to_rgba8();
        drop(image);

        let surface = imageops::resize(&rgba, GRID_WIDTH, GRID_HEIGHT, self.filter.filter_type());
        PixelGrid::from_raw(surface.into_raw()).ok_or_else(|| {
            NormalizeError::Decode("resampled surface has unexpected size".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        image.write_to(&mut cursor, ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_stretches_non_square_image() {
        // left half red, right half blue
        let image = RgbaImage::from_fn(40, 10, |x, _| {
            if x < 20 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let decoder = ResizeDecoder::new(ResampleFilter::Nearest);
        let grid = decoder.decode_and_resample(&encode_png(&image)).unwrap();

        assert_eq!(grid.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(grid.pixel(0, 255), Some([255, 0, 0, 255]));
        assert_eq!(grid.pixel(255, 0), Some([0, 0, 255, 255]));
        assert_eq!(grid.pixel(255, 255), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_solid_color_survives_every_filter() {
        let image = RgbaImage::from_pixel(17, 93, Rgba([12, 200, 34, 255]));
        let bytes = encode_png(&image);
        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Bilinear,
        ] {
            let grid = ResizeDecoder::new(filter).decode_and_resample(&bytes).unwrap();
            assert_eq!(grid.pixel(128, 128), Some([12, 200, 34, 255]), "filter {}", filter);
        }
    }

    #[test]
    fn test_default_decoder_is_bilinear() {
        assert_eq!(ResizeDecoder::default().filter(), ResampleFilter::Bilinear);
        assert_eq!(ResizeDecoder::new(ResampleFilter::Lanczos3).filter(), ResampleFilter::Lanczos3);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = ResizeDecoder::default()
            .decode_and_resample(b"definitely not an image")
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_empty_bytes_is_decode_error() {
        let err = ResizeDecoder::default().decode_and_resample(&[]).unwrap_err();
        assert!(err.is_decode());
    }
}
