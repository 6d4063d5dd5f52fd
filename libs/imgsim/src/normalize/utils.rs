use super::{ImageDecoder, PixelGrid};
use crate::common::{NormalizeError, RawImageInput};

/// Reads the input and hands its bytes to `decoder`. Whatever buffers the
/// decoder allocates are dropped before this returns, on both paths.
pub fn normalize<D>(input: &RawImageInput, decoder: &D) -> Result<PixelGrid, NormalizeError>
where
    D: ImageDecoder + ?Sized,
{
    let bytes = input.read().map_err(|e| {
        log::warn!("Could not read image source: {}", e);
        e
    })?;

    decoder.decode_and_resample(&bytes).map_err(|e| {
        log::warn!("Could not normalize {} byte image: {}", bytes.len(), e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ResizeDecoder;

    struct FirstByteDecoder;

    impl ImageDecoder for FirstByteDecoder {
        fn decode_and_resample(&self, bytes: &[u8]) -> Result<PixelGrid, NormalizeError> {
            match bytes.first() {
                Some(&v) => Ok(PixelGrid::filled([v, v, v, 255])),
                None => Err(NormalizeError::Decode("empty".to_string())),
            }
        }
    }

    #[test]
    fn test_normalize_uses_injected_decoder() {
        let input = RawImageInput::from_bytes(vec![9u8, 1, 1]);
        let grid = normalize(&input, &FirstByteDecoder).unwrap();
        assert_eq!(grid, PixelGrid::filled([9, 9, 9, 255]));
    }

    #[test]
    fn test_normalize_propagates_decode_error() {
        let input = RawImageInput::from_bytes(vec![0u8, 1, 2, 3]);
        let err = normalize(&input, &ResizeDecoder::default()).unwrap_err();
        assert!(err.is_decode());
    }
}
