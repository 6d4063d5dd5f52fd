use super::types::{Histogram, HISTOGRAM_BINS};
use crate::common::clamp_score;
use crate::normalize::GRID_CHANNELS;

/// Rounded `sqrt(3 * 255^2)`, the largest RGB distance between two pixels.
pub const MAX_RGB_DISTANCE: f64 = 441.0;

/// How close two byte sizes are, as a percentage of the larger one.
pub fn size_similarity(size1: u64, size2: u64) -> f64 {
    let max_size = size1.max(size2);
    let min_size = size1.min(size2);
    if max_size == 0 {
        return 100.0;
    }

    let similarity = (min_size as f64 / max_size as f64) * 100.0;
    clamp_score(similarity.min(100.0))
}

/// Mean Euclidean RGB distance between corresponding pixels, mapped onto
/// [0, 100]. Alpha is ignored. Only the overlapping prefix of the two sample
/// slices is compared.
pub fn pixel_similarity(samples1: &[u8], samples2: &[u8]) -> f64 {
    let mut total_distance = 0.0f64;
    let mut pixel_count = 0u64;

    for (p1, p2) in samples1
        .chunks_exact(GRID_CHANNELS)
        .zip(samples2.chunks_exact(GRID_CHANNELS))
    {
        let dr = p1[0] as f64 - p2[0] as f64;
        let dg = p1[1] as f64 - p2[1] as f64;
        let db = p1[2] as f64 - p2[2] as f64;
        total_distance += (dr * dr + dg * dg + db * db).sqrt();
        pixel_count += 1;
    }

    let avg_distance = if pixel_count > 0 {
        total_distance / pixel_count as f64
    } else {
        0.0
    };

    clamp_score(100.0 - (avg_distance / MAX_RGB_DISTANCE) * 100.0)
}

pub fn build_histogram(samples: &[u8]) -> Histogram {
    let mut counts = [0u64; HISTOGRAM_BINS];
    for &red in samples.iter().step_by(GRID_CHANNELS) {
        counts[red as usize] += 1;
    }

    let sum: u64 = counts.iter().sum();
    let mut bins = [0.0f64; HISTOGRAM_BINS];
    if sum > 0 {
        for (bin, &count) in bins.iter_mut().zip(counts.iter()) {
            *bin = count as f64 / sum as f64;
        }
    }
    Histogram::from_bins(bins)
}

/// Bhattacharyya coefficient of the red-channel histograms, as a percentage.
pub fn histogram_similarity(samples1: &[u8], samples2: &[u8]) -> f64 {
    let hist1 = build_histogram(samples1);
    let hist2 = build_histogram(samples2);
    clamp_score(hist1.bhattacharyya(&hist2) * 100.0)
}
