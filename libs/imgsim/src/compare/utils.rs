use std::sync::Arc;

use super::types::CompareConfig;
use crate::aggregate::{aggregate, ComparisonResult};
use crate::common::{ComparisonError, NormalizeError, RawImageInput};
use crate::metrics::{histogram_similarity, pixel_similarity, size_similarity};
use crate::normalize::{normalize, ImageDecoder, PixelGrid, ResizeDecoder};

/// Compares two images with the `image` crate decoder configured by `config`.
pub async fn compare_images(
    first: RawImageInput,
    second: RawImageInput,
    config: &CompareConfig,
) -> Result<ComparisonResult, ComparisonError> {
    let decoder = Arc::new(ResizeDecoder::new(config.filter));
    if config.parallel {
        compare_images_with_decoder(first, second, decoder).await
    } else {
        compare_images_sequential_with_decoder(first, second, decoder).await
    }
}

/// Normalizes both inputs concurrently on tokio's blocking pool, then scores
/// them. If both normalizations fail, the first input's error is reported.
pub async fn compare_images_with_decoder<D>(
    first: RawImageInput,
    second: RawImageInput,
    decoder: Arc<D>,
) -> Result<ComparisonResult, ComparisonError>
where
    D: ImageDecoder + ?Sized + 'static,
{
    let first_task = spawn_normalize(first, decoder.clone());
    let second_task = spawn_normalize(second, decoder);

    let (first_res, second_res) = tokio::join!(first_task, second_task);
    let (size1, grid1) = first_res.map_err(log_failure)?;
    let (size2, grid2) = second_res.map_err(log_failure)?;

    Ok(score(size1, size2, &grid1, &grid2))
}

/// Normalizes the inputs one after the other, off the async worker, on
/// tokio's blocking pool.
pub async fn compare_images_sequential_with_decoder<D>(
    first: RawImageInput,
    second: RawImageInput,
    decoder: Arc<D>,
) -> Result<ComparisonResult, ComparisonError>
where
    D: ImageDecoder + ?Sized + 'static,
{
    let handle = tokio::task::spawn_blocking(move || {
        compare_images_blocking_with_decoder(&first, &second, &*decoder)
    });

    handle
        .await
        .map_err(|e| log_failure(task_failed(e)))?
}

pub fn compare_images_blocking(
    first: &RawImageInput,
    second: &RawImageInput,
    config: &CompareConfig,
) -> Result<ComparisonResult, ComparisonError> {
    let decoder = ResizeDecoder::new(config.filter);
    compare_images_blocking_with_decoder(first, second, &decoder)
}

/// Same as [`compare_images_with_decoder`] but normalizes one image after the
/// other on the calling thread.
pub fn compare_images_blocking_with_decoder<D>(
    first: &RawImageInput,
    second: &RawImageInput,
    decoder: &D,
) -> Result<ComparisonResult, ComparisonError>
where
    D: ImageDecoder + ?Sized,
{
    let grid1 = normalize(first, decoder).map_err(log_failure)?;
    let grid2 = normalize(second, decoder).map_err(log_failure)?;

    Ok(score(first.size(), second.size(), &grid1, &grid2))
}

async fn spawn_normalize<D>(
    input: RawImageInput,
    decoder: Arc<D>,
) -> Result<(u64, PixelGrid), NormalizeError>
where
    D: ImageDecoder + ?Sized + 'static,
{
    let handle = tokio::task::spawn_blocking(move || -> Result<(u64, PixelGrid), NormalizeError> {
        let grid = normalize(&input, &*decoder)?;
        Ok((input.size(), grid))
    });

    handle.await.map_err(task_failed)?
}

fn task_failed(err: tokio::task::JoinError) -> NormalizeError {
    NormalizeError::Decode(format!("normalization task failed: {}", err))
}

fn score(size1: u64, size2: u64, grid1: &PixelGrid, grid2: &PixelGrid) -> ComparisonResult {
    let size = size_similarity(size1, size2);
    let pixel = pixel_similarity(grid1.samples(), grid2.samples());
    let histogram = histogram_similarity(grid1.samples(), grid2.samples());

    let result = aggregate(size, pixel, histogram);
    log::info!(
        "Comparison finished: {} (score {:.2})",
        result.message,
        result.similarity_score
    );
    result
}

fn log_failure(err: NormalizeError) -> ComparisonError {
    let err = ComparisonError::from(err);
    log::error!("{}", err);
    err
}
