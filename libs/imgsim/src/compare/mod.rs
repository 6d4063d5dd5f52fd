mod types;
mod utils;

pub use types::CompareConfig;
pub use utils::{
    compare_images, compare_images_blocking, compare_images_blocking_with_decoder,
    compare_images_sequential_with_decoder, compare_images_with_decoder,
};
