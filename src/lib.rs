//! Brand color extraction.
//!
//! Candidate images are prioritized, loaded, quantized with k-means in Lab space, and folded
//! into a weighted frequency map. The ranked result can then be stripped of near-grayscale
//! colors with [`filter_brand_colors`].

pub mod aggregate;
pub mod color;
pub mod error;
pub mod filter;
pub mod prioritize;
pub mod quantize;
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub mod extract;
#[cfg(not(target_arch = "wasm32"))]
pub mod loader;

pub use aggregate::{ColorFrequencyMap, ExtractionResult, FrequencyAggregator, rank_colors};
pub use color::HexColor;
pub use error::{ExtractError, HexParseError, QuantizeError, Result};
pub use filter::{filter_brand_colors, is_near_grayscale};
pub use prioritize::{CandidateImage, prioritize_images};
pub use quantize::{ImageColors, QuantizeOptions, extract_image_colors};

#[cfg(not(target_arch = "wasm32"))]
pub use error::LoadError;
#[cfg(not(target_arch = "wasm32"))]
pub use extract::{BrandColorExtractor, ExtractOptions, extract_colors_from_images};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::{DefaultImageLoader, FsImageLoader, HttpImageLoader, ImageLoader};
