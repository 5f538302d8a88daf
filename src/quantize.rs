use std::collections::HashSet;

use image::DynamicImage;
use kmeans_colors::get_kmeans;
use palette::{IntoColor, Lab, Srgb};
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::{QuantizeError, Result, validate_positive, validate_range};

/// Upper bound on palette entries per image.
pub const MAX_PALETTE_SIZE: usize = 64;

const KMEANS_MAX_ITER: usize = 20;
const KMEANS_CONVERGE: f32 = 1e-4;
const KMEANS_SEED: u64 = 0;

/// Parameters for a single image's color extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantizeOptions {
    /// Number of representative colors to extract.
    pub palette_size: usize,
    /// Sampling stride: every `quality`-th pixel is considered. Larger is coarser and faster.
    pub quality: usize,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            palette_size: 5,
            quality: 10,
        }
    }
}

impl QuantizeOptions {
    pub fn validate(&self) -> Result<()> {
        validate_range("palette_size", self.palette_size, 1, MAX_PALETTE_SIZE)?;
        validate_positive("quality", self.quality)
    }
}

/// Colors extracted from one image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageColors {
    pub dominant: HexColor,
    pub palette: Vec<HexColor>,
}

/// Quantize an image into its dominant color and a small palette.
///
/// Steps performed:
/// 1. Sample every `quality`-th pixel in row-major order, skipping fully transparent ones.
/// 2. Run k-means in Lab color space with `k = min(palette_size, distinct sampled colors)`.
/// 3. Order the non-empty clusters by member count; the largest one is the dominant color.
///
/// Out-of-range options are clamped rather than rejected; callers wanting strict checking
/// should use [`QuantizeOptions::validate`] first.
pub fn extract_image_colors(
    img: &DynamicImage,
    opts: QuantizeOptions,
) -> std::result::Result<ImageColors, QuantizeError> {
    let stride = opts.quality.max(1);
    let rgba8 = img.to_rgba8();

    let mut lab_pixels: Vec<Lab> = Vec::new();
    let mut distinct: HashSet<[u8; 3]> = HashSet::new();
    for px in rgba8.pixels().step_by(stride) {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        distinct.insert([r, g, b]);
        let srgb = Srgb::<u8>::new(r, g, b);
        lab_pixels.push(srgb.into_linear().into_color());
    }

    if lab_pixels.is_empty() {
        return Err(QuantizeError::NoOpaquePixels);
    }

    // k-means++ seeding needs at least k distinct points.
    let k = opts.palette_size.clamp(1, MAX_PALETTE_SIZE).min(distinct.len());
    let kmeans = get_kmeans(k, KMEANS_MAX_ITER, KMEANS_CONVERGE, false, &lab_pixels, KMEANS_SEED);

    let mut counts = vec![0usize; kmeans.centroids.len()];
    for &idx in &kmeans.indices {
        counts[idx as usize] += 1;
    }

    let mut order: Vec<usize> = (0..counts.len()).filter(|&i| counts[i] > 0).collect();
    order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));

    let palette: Vec<HexColor> = order
        .iter()
        .map(|&i| {
            let rgb_f32: Srgb<f32> = Srgb::from_linear(kmeans.centroids[i].into_color());
            HexColor::from(rgb_f32.into_format::<u8>())
        })
        .collect();

    let dominant = *palette.first().ok_or(QuantizeError::NoOpaquePixels)?;

    Ok(ImageColors { dominant, palette })
}
