//! Ordering of candidate image URLs ahead of loading.

const BRAND_KEYWORDS: [&str; 2] = ["logo", "brand"];

/// A candidate image URL and whether it looks like a brand asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateImage {
    pub url: String,
    pub is_brand_asset: bool,
}

impl CandidateImage {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let lower = url.to_lowercase();
        let is_brand_asset = BRAND_KEYWORDS.iter().any(|k| lower.contains(k));
        Self { url, is_brand_asset }
    }
}

/// Returns at most `max` candidates, brand/logo URLs first.
///
/// Relative order inside each group follows the input.
pub fn prioritize_images<S: AsRef<str>>(urls: &[S], max: usize) -> Vec<CandidateImage> {
    let (mut brand, other): (Vec<_>, Vec<_>) = urls
        .iter()
        .map(|u| CandidateImage::new(u.as_ref()))
        .partition(|c| c.is_brand_asset);
    brand.extend(other);
    brand.truncate(max);
    brand
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(c: &[CandidateImage]) -> Vec<&str> {
        c.iter().map(|c| c.url.as_str()).collect()
    }

    #[test]
    fn detects_keywords_case_insensitively() {
        assert!(CandidateImage::new("https://cdn.example.com/img/Company-LOGO.png").is_brand_asset);
        assert!(CandidateImage::new("https://example.com/Branding/hero.jpg").is_brand_asset);
        assert!(!CandidateImage::new("https://example.com/products/shoe.jpg").is_brand_asset);
    }

    #[test]
    fn brand_assets_move_ahead_preserving_order() {
        let input = ["a.jpg", "logo-1.png", "b.jpg", "brand.svg", "c.jpg"];
        let out = prioritize_images(&input, 10);
        assert_eq!(urls(&out), ["logo-1.png", "brand.svg", "a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn truncates_after_ordering() {
        let input = ["a.jpg", "b.jpg", "c.jpg", "logo.png"];
        assert_eq!(urls(&prioritize_images(&input, 2)), ["logo.png", "a.jpg"]);
        assert!(prioritize_images(&input, 0).is_empty());
    }

    #[test]
    fn empty_input() {
        let input: [&str; 0] = [];
        assert!(prioritize_images(&input, 5).is_empty());
    }
}
