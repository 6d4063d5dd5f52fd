use super::types::{ComparisonResult, DIFFERENT_MESSAGE, SIMILAR_MESSAGE};
use crate::common::{clamp_score, round_to_hundredths};

pub const SIZE_WEIGHT: f64 = 0.2;
pub const PIXEL_WEIGHT: f64 = 0.6;
pub const HISTOGRAM_WEIGHT: f64 = 0.2;

/// Aggregate scores at or above this are reported as similar.
pub const SIMILARITY_THRESHOLD: f64 = 70.0;

pub fn weighted_score(size: f64, pixel: f64, histogram: f64) -> f64 {
    clamp_score(size * SIZE_WEIGHT + pixel * PIXEL_WEIGHT + histogram * HISTOGRAM_WEIGHT)
}

pub fn is_similar(score: f64) -> bool {
    score >= SIMILARITY_THRESHOLD
}

/// Combines the three metric scores. The verdict is taken on the unrounded
/// aggregate; only the reported numbers are rounded.
pub fn aggregate(size: f64, pixel: f64, histogram: f64) -> ComparisonResult {
    let overall = weighted_score(size, pixel, histogram);
    let similar = is_similar(overall);

    log::debug!(
        "size {:.4} pixel {:.4} histogram {:.4} -> overall {:.4}",
        size,
        pixel,
        histogram,
        overall
    );

    ComparisonResult {
        similarity_score: round_to_hundredths(overall),
        pixel_similarity: round_to_hundredths(clamp_score(pixel)),
        histogram_similarity: round_to_hundredths(clamp_score(histogram)),
        is_similar: similar,
        message: if similar { SIMILAR_MESSAGE } else { DIFFERENT_MESSAGE }.to_string(),
    }
}
