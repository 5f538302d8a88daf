use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::{ExtractionResult, FrequencyAggregator};
use crate::error::{LoadError, QuantizeError, Result, validate_positive, validate_range};
use crate::loader::{DefaultImageLoader, ImageLoader};
use crate::prioritize::{CandidateImage, prioritize_images};
use crate::quantize::{ImageColors, MAX_PALETTE_SIZE, QuantizeOptions, extract_image_colors};

/// Options for [`extract_colors_from_images`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Images considered after prioritization.
    pub max_images: usize,
    /// Palette size requested from each image.
    pub colors_per_image: usize,
    /// Pixel sampling stride.
    pub quality: usize,
    /// Images loaded and quantized at the same time.
    pub concurrency: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_images: 5,
            colors_per_image: 5,
            quality: 10,
            concurrency: 4,
        }
    }
}

impl ExtractOptions {
    pub fn quantize(&self) -> QuantizeOptions {
        QuantizeOptions {
            palette_size: self.colors_per_image,
            quality: self.quality,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_range("colors_per_image", self.colors_per_image, 1, MAX_PALETTE_SIZE)?;
        validate_positive("quality", self.quality)?;
        validate_positive("concurrency", self.concurrency)
    }
}

/// Why one image contributed nothing.
#[derive(Error, Debug)]
enum ImageFailure {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Quantize(#[from] QuantizeError),
}

/// Runs prioritize → load → quantize → aggregate over a pluggable loader.
#[derive(Clone, Debug, Default)]
pub struct BrandColorExtractor<L> {
    loader: L,
}

impl<L: ImageLoader> BrandColorExtractor<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Produces the ranked palette for a set of candidate URLs.
    ///
    /// Individual load or decode failures are logged and skipped; only invalid options
    /// produce an error.
    pub async fn extract<S: AsRef<str>>(
        &self,
        urls: &[S],
        options: &ExtractOptions,
    ) -> Result<ExtractionResult> {
        options.validate()?;

        let candidates = prioritize_images(urls, options.max_images);
        let quantize = options.quantize();
        tracing::debug!(
            "Processing {} of {} candidate images",
            candidates.len(),
            urls.len()
        );

        // `buffered` yields in input order, so the fold below is deterministic.
        let outcomes: Vec<(CandidateImage, std::result::Result<ImageColors, ImageFailure>)> =
            stream::iter(candidates)
                .map(|candidate| async move {
                    let outcome = self.process(&candidate.url, quantize).await;
                    (candidate, outcome)
                })
                .buffered(options.concurrency)
                .collect()
                .await;

        let mut aggregator = FrequencyAggregator::new();
        for (candidate, outcome) in &outcomes {
            match outcome {
                Ok(colors) => {
                    tracing::debug!(
                        "{}: dominant {}, {} palette colors",
                        candidate.url,
                        colors.dominant,
                        colors.palette.len()
                    );
                    aggregator.add(colors);
                }
                Err(e) => tracing::warn!("Skipping image {}: {}", candidate.url, e),
            }
        }

        tracing::info!(
            "Extracted {} colors from {}/{} images",
            aggregator.frequency().len(),
            aggregator.image_count(),
            outcomes.len()
        );
        Ok(aggregator.finish())
    }

    async fn process(
        &self,
        url: &str,
        quantize: QuantizeOptions,
    ) -> std::result::Result<ImageColors, ImageFailure> {
        let img = self.loader.load(url).await?;
        Ok(extract_image_colors(&img, quantize)?)
    }
}

/// Extracts a ranked brand palette from image URLs using the default loader.
pub async fn extract_colors_from_images<S: AsRef<str>>(
    urls: &[S],
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    BrandColorExtractor::new(DefaultImageLoader::new())
        .extract(urls, options)
        .await
}
