pub mod common;
pub mod normalize;
pub mod metrics;
pub mod aggregate;
pub mod compare;

pub use common::{ComparisonError, NormalizeError, RawImageInput};
pub use normalize::{ImageDecoder, PixelGrid, ResampleFilter, ResizeDecoder};
pub use aggregate::ComparisonResult;
pub use compare::{
    compare_images, compare_images_blocking, compare_images_blocking_with_decoder,
    compare_images_sequential_with_decoder, compare_images_with_decoder, CompareConfig,
};
