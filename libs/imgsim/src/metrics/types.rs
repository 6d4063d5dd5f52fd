pub const HISTOGRAM_BINS: usize = 256;

/// Normalized red-channel histogram. Bins sum to 1.0 unless the source had no
/// pixels, in which case every bin is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: [f64; HISTOGRAM_BINS],
}

impl Histogram {
    pub(crate) fn from_bins(bins: [f64; HISTOGRAM_BINS]) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[f64; HISTOGRAM_BINS] {
        &self.bins
    }

    pub fn total(&self) -> f64 {
        self.bins.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(|&b| b == 0.0)
    }

    /// Overlap between two distributions, in [0, 1] for normalized inputs.
    pub fn bhattacharyya(&self, other: &Histogram) -> f64 {
        self.bins
            .iter()
            .zip(other.bins.iter())
            .map(|(a, b)| (a * b).sqrt())
            .sum()
    }
}
