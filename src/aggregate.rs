use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::quantize::ImageColors;

/// Weight a dominant color contributes per image.
pub const DOMINANT_WEIGHT: u32 = 3;
/// Weight each palette slot contributes per image.
pub const PALETTE_WEIGHT: u32 = 1;

/// Hex color to accumulated weight, iterated in first-seen order.
pub type ColorFrequencyMap = IndexMap<HexColor, u32>;

/// Ranked palette plus the frequency map backing it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub colors: Vec<HexColor>,
    pub color_frequency: ColorFrequencyMap,
}

/// Single owner of the frequency map for one extraction call.
#[derive(Debug, Default)]
pub struct FrequencyAggregator {
    frequency: ColorFrequencyMap,
    images: usize,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, colors: &ImageColors) {
        self.bump(colors.dominant, DOMINANT_WEIGHT);
        for &c in &colors.palette {
            self.bump(c, PALETTE_WEIGHT);
        }
        self.images += 1;
    }

    fn bump(&mut self, color: HexColor, weight: u32) {
        *self.frequency.entry(color).or_insert(0) += weight;
    }

    /// Number of images folded in so far.
    pub fn image_count(&self) -> usize {
        self.images
    }

    pub fn frequency(&self) -> &ColorFrequencyMap {
        &self.frequency
    }

    /// Unique colors sorted by descending weight; equal weights keep first-seen order.
    pub fn finish(self) -> ExtractionResult {
        let mut colors: Vec<HexColor> = self.frequency.keys().copied().collect();
        colors.sort_by(|a, b| self.frequency[b].cmp(&self.frequency[a]));
        ExtractionResult {
            colors,
            color_frequency: self.frequency,
        }
    }
}

impl<'a> Extend<&'a ImageColors> for FrequencyAggregator {
    fn extend<I: IntoIterator<Item = &'a ImageColors>>(&mut self, iter: I) {
        for colors in iter {
            self.add(colors);
        }
    }
}

/// Folds per-image extractions into a ranked palette.
pub fn rank_colors<'a, I>(images: I) -> ExtractionResult
where
    I: IntoIterator<Item = &'a ImageColors>,
{
    let mut agg = FrequencyAggregator::new();
    agg.extend(images);
    agg.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn image(dominant: &str, palette: &[&str]) -> ImageColors {
        ImageColors {
            dominant: hex(dominant),
            palette: palette.iter().map(|p| hex(p)).collect(),
        }
    }

    fn names(colors: &[HexColor]) -> Vec<String> {
        colors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn dominant_and_palette_weights_add_up() {
        let result = rank_colors(&[image("#1a2b3c", &["#1a2b3c", "#ffffff"])]);
        assert_eq!(names(&result.colors), ["#1a2b3c", "#ffffff"]);
        assert_eq!(result.color_frequency[&hex("#1a2b3c")], 4);
        assert_eq!(result.color_frequency[&hex("#ffffff")], 1);
    }

    #[test]
    fn shared_dominant_outranks_single_palette_entries() {
        let result = rank_colors(&[
            image("#ff0000", &["#00ff00"]),
            image("#ff0000", &["#0000ff"]),
        ]);
        assert_eq!(result.color_frequency[&hex("#ff0000")], 6);
        assert_eq!(names(&result.colors), ["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let result = rank_colors(&[
            image("#111111", &["#cc0000", "#00cc00"]),
            image("#222222", &["#00cc00", "#0000cc"]),
        ]);
        // #111111=3, #cc0000=1, #00cc00=2, #222222=3, #0000cc=1
        assert_eq!(
            names(&result.colors),
            ["#111111", "#222222", "#00cc00", "#cc0000", "#0000cc"]
        );
    }

    #[test]
    fn output_is_unique_and_non_increasing() {
        let images = [
            image("#ff0000", &["#ff0000", "#00ff00", "#00ff00"]),
            image("#00ff00", &["#0000ff"]),
            image("#abcdef", &["#ff0000", "#abcdef"]),
        ];
        let result = rank_colors(&images);

        let mut seen = std::collections::HashSet::new();
        assert!(result.colors.iter().all(|c| seen.insert(*c)));
        assert_eq!(result.colors.len(), result.color_frequency.len());

        let weights: Vec<u32> = result.colors.iter().map(|c| result.color_frequency[c]).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(weights.iter().sum::<u32>(), 3 * 3 + 6);
    }

    #[test]
    fn empty_input_is_empty_result() {
        let result = rank_colors(&[]);
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = rank_colors(&[image("#1a2b3c", &["#ffffff"])]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "colors": ["#1a2b3c", "#ffffff"],
                "colorFrequency": {"#1a2b3c": 3, "#ffffff": 1}
            })
        );
    }
}
