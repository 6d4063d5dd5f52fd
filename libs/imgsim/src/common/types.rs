use std::borrow::Cow;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::NormalizeError;

/// Where the bytes of an input image live.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Bytes(Vec<u8>),
    /// Read lazily when the image is normalized.
    Path(PathBuf),
}

/// An image handed over by the caller, along with its size in bytes.
#[derive(Debug, Clone)]
pub struct RawImageInput {
    source: ImageSource,
    size: u64,
}

impl RawImageInput {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let size = bytes.len() as u64;
        Self {
            source: ImageSource::Bytes(bytes),
            size,
        }
    }

    /// Captures a file on disk. The size comes from the file metadata; the
    /// content itself is only read during normalization.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NormalizeError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .map_err(|e| NormalizeError::Read(format!("{}: {}", path.display(), e)))?;

        if !metadata.is_file() {
            return Err(NormalizeError::Read(format!(
                "{}: not a regular file",
                path.display()
            )));
        }

        Ok(Self {
            source: ImageSource::Path(path.to_path_buf()),
            size: metadata.len(),
        })
    }

    /// Accepts either a `data:image/...;base64,` URL or a bare base64 payload.
    pub fn from_data_url(data_url: &str) -> Result<Self, NormalizeError> {
        let base64_part = if data_url.contains(',') {
            data_url.split(',').nth(1).unwrap_or(data_url)
        } else {
            data_url
        };

        let bytes = STANDARD
            .decode(base64_part.trim())
            .map_err(|e| NormalizeError::Read(format!("invalid base64 data: {}", e)))?;

        Ok(Self::from_bytes(bytes))
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn read(&self) -> Result<Cow<'_, [u8]>, NormalizeError> {
        match &self.source {
            ImageSource::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            ImageSource::Path(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| NormalizeError::Read(format!("{}: {}", path.display(), e))),
        }
    }
}
