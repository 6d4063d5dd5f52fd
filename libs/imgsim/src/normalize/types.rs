use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

pub const GRID_WIDTH: u32 = 256;
pub const GRID_HEIGHT: u32 = 256;
pub const GRID_CHANNELS: usize = 4;
pub const GRID_LEN: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize * GRID_CHANNELS;

/// A 256x256 RGBA raster every input image is stretched onto before comparison.
///
/// Samples are stored row-major, four bytes per pixel in R, G, B, A order.
/// The length is fixed, so a grid can only be built through constructors that
/// check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    samples: Vec<u8>,
}

impl PixelGrid {
    pub fn from_raw(samples: Vec<u8>) -> Option<Self> {
        if samples.len() != GRID_LEN {
            return None;
        }
        Some(Self { samples })
    }

    pub fn filled(rgba: [u8; 4]) -> Self {
        Self::from_fn(|_, _| rgba)
    }

    pub fn from_fn(mut pixel_at: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut samples = Vec::with_capacity(GRID_LEN);
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                samples.extend_from_slice(&pixel_at(x, y));
            }
        }
        Self { samples }
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// RGBA sample at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return None;
        }
        let offset = ((y * GRID_WIDTH + x) as usize) * GRID_CHANNELS;
        let px = &self.samples[offset..offset + GRID_CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.samples
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(&self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for ResampleFilter {
    fn default() -> Self {
        ResampleFilter::Bilinear
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "nearest"),
            ResampleFilter::Bilinear => write!(f, "bilinear"),
            ResampleFilter::CatmullRom => write!(f, "catmull-rom"),
            ResampleFilter::Gaussian => write!(f, "gaussian"),
            ResampleFilter::Lanczos3 => write!(f, "lanczos3"),
        }
    }
}

impl From<&str> for ResampleFilter {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "nearest" => ResampleFilter::Nearest,
            "bilinear" | "triangle" => ResampleFilter::Bilinear,
            "catmull-rom" | "catmullrom" | "cubic" => ResampleFilter::CatmullRom,
            "gaussian" => ResampleFilter::Gaussian,
            "lanczos3" | "lanczos" => ResampleFilter::Lanczos3,
            other => {
                log::warn!("Unknown resample filter '{}', using {}", other, ResampleFilter::default());
                ResampleFilter::default()
            }
        }
    }
}

impl From<String> for ResampleFilter {
    fn from(s: String) -> Self {
        ResampleFilter::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        assert!(PixelGrid::from_raw(vec![0; GRID_LEN]).is_some());
        assert!(PixelGrid::from_raw(vec![0; GRID_LEN - 4]).is_none());
        assert!(PixelGrid::from_raw(Vec::new()).is_none());
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(|x, y| [x as u8, y as u8, 7, 255]);
        assert_eq!(grid.samples().len(), GRID_LEN);
        assert_eq!(grid.pixel(3, 5), Some([3, 5, 7, 255]));
        assert_eq!(&grid.samples()[4..8], &[1, 0, 7, 255]);
        assert_eq!(grid.pixel(255, 255), Some([255, 255, 7, 255]));
    }

    #[test]
    fn test_pixel_outside_grid_is_none() {
        let grid = PixelGrid::filled([1, 2, 3, 4]);
        assert_eq!(grid.pixel(GRID_WIDTH, 0), None);
        assert_eq!(grid.pixel(0, GRID_HEIGHT), None);
        assert_eq!(grid.pixel(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_into_raw_round_trips_through_from_raw() {
        let grid = PixelGrid::from_fn(|x, y| [x as u8, y as u8, 0, 255]);
        let raw = grid.clone().into_raw();
        assert_eq!(raw.len(), GRID_LEN);
        assert_eq!(PixelGrid::from_raw(raw), Some(grid));
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(ResampleFilter::from("Nearest"), ResampleFilter::Nearest);
        assert_eq!(ResampleFilter::from("catmull-rom"), ResampleFilter::CatmullRom);
        assert_eq!(ResampleFilter::from("LANCZOS3".to_string()), ResampleFilter::Lanczos3);
        assert_eq!(ResampleFilter::from("bogus"), ResampleFilter::Bilinear);
    }

    #[test]
    fn test_filter_display_parses_back() {
        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Bilinear,
            ResampleFilter::CatmullRom,
            ResampleFilter::Gaussian,
            ResampleFilter::Lanczos3,
        ] {
            assert_eq!(ResampleFilter::from(filter.to_string()), filter);
        }
    }
}
