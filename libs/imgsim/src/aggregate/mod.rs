mod types;
mod utils;

pub use types::ComparisonResult;
pub use utils::{aggregate, is_similar, weighted_score};
pub use utils::{HISTOGRAM_WEIGHT, PIXEL_WEIGHT, SIMILARITY_THRESHOLD, SIZE_WEIGHT};
