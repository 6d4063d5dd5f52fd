mod decoder;
mod types;
mod utils;

pub use decoder::{ImageDecoder, ResizeDecoder};
pub use types::{PixelGrid, ResampleFilter, GRID_CHANNELS, GRID_HEIGHT, GRID_LEN, GRID_WIDTH};
pub use utils::normalize;
