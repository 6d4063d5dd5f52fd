mod types;
mod utils;

pub use types::{Histogram, HISTOGRAM_BINS};
pub use utils::{build_histogram, histogram_similarity, pixel_similarity, size_similarity};
pub use utils::MAX_RGB_DISTANCE;
