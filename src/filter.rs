use crate::color::HexColor;

/// Colors whose channel spread is at or below this are treated as neutral.
pub const GRAYSCALE_THRESHOLD: u8 = 15;

pub fn is_near_grayscale(color: &HexColor) -> bool {
    color.channel_spread() <= GRAYSCALE_THRESHOLD
}

/// Drops near-grayscale and malformed entries, keeping the rest in input order.
pub fn filter_brand_colors<S: AsRef<str>>(colors: &[S]) -> Vec<String> {
    colors
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| {
            s.parse::<HexColor>()
                .map(|c| !is_near_grayscale(&c))
                .unwrap_or(false)
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_in_empty_out() {
        let none: [&str; 0] = [];
        assert!(filter_brand_colors(&none).is_empty());
    }

    #[test]
    fn removes_neutrals() {
        assert!(filter_brand_colors(&["#808080", "#7f7f80"]).is_empty());
        assert!(filter_brand_colors(&["#000000", "#ffffff", "#f0f0ff"]).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        // spread 15 is neutral, 16 is not
        assert_eq!(filter_brand_colors(&["#10101f", "#101020"]), ["#101020"]);
    }

    #[test]
    fn keeps_order_and_drops_malformed() {
        let input = ["#ff0000", "nope", "#808080", "#1A2B3C", "#12345", "#00ff00"];
        assert_eq!(filter_brand_colors(&input), ["#ff0000", "#1A2B3C", "#00ff00"]);
    }

    #[test]
    fn retained_colors_exceed_threshold() {
        let input: Vec<String> = (0..=255u32)
            .step_by(5)
            .map(|v| format!("#{:02x}{:02x}{:02x}", v, (v * 7) % 256, 255 - v))
            .collect();
        for kept in filter_brand_colors(&input) {
            let c: HexColor = kept.parse().unwrap();
            assert!(c.channel_spread() > GRAYSCALE_THRESHOLD);
        }
    }
}
