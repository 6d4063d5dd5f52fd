use thiserror::Error;

/// Failure while turning a raw input into a pixel grid.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Failed to read file: {0}")]
    Read(String),

    #[error("Failed to load image: {0}")]
    Decode(String),
}

impl NormalizeError {
    pub fn is_read(&self) -> bool {
        matches!(self, NormalizeError::Read(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, NormalizeError::Decode(_))
    }
}

/// The only error surfaced by the comparison entry points.
#[derive(Debug, Error)]
#[error("Image comparison failed: {source}")]
pub struct ComparisonError {
    #[source]
    source: NormalizeError,
}

impl ComparisonError {
    pub fn cause(&self) -> &NormalizeError {
        &self.source
    }
}

impl From<NormalizeError> for ComparisonError {
    fn from(source: NormalizeError) -> Self {
        Self { source }
    }
}
