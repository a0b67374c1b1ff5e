//! Summarization savings statistics and their display form.
//!
//! The backend reports raw character counts plus its own `percentage`.
//! The display ratios are recomputed from the raw counts so that every
//! figure on screen comes from the same source.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Character counts before and after the server-side summarization step.
///
/// Each field decodes leniently: `null`, strings and other non-numbers
/// become 0, and fractional counts are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsStats {
    #[serde(deserialize_with = "lenient_count")]
    pub original_chars: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub summarized_chars: u64,
    /// May be negative when the summary is longer than the original.
    #[serde(deserialize_with = "lenient_signed")]
    pub saved: i64,
    /// Server-computed figure; informational only.
    #[serde(deserialize_with = "lenient_float")]
    pub percentage: f64,
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    lenient_number(deserializer).map(|n| round_half_up(n.max(0.0)).max(0) as u64)
}

fn lenient_signed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient_number(deserializer).map(round_half_up)
}

fn lenient_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    lenient_number(deserializer)
}

/// Figures shown in the savings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsView {
    pub original_chars: u64,
    pub summarized_chars: u64,
    pub saved: i64,
    /// `summarized / original` as a rounded percentage.
    pub summary_ratio: i64,
    /// `saved / original` as a rounded percentage.
    pub saved_percentage: i64,
}

impl SavingsView {
    /// Derive display ratios; both are 0 when `original_chars` is 0.
    pub fn from_stats(stats: &SavingsStats) -> Self {
        let summary_ratio = ratio_percent(stats.summarized_chars as f64, stats.original_chars);
        let saved_percentage = ratio_percent(stats.saved as f64, stats.original_chars);

        Self {
            original_chars: stats.original_chars,
            summarized_chars: stats.summarized_chars,
            saved: stats.saved,
            summary_ratio,
            saved_percentage,
        }
    }

    /// Width of the bar fill, in percent of the track.
    pub fn bar_width(&self) -> i64 {
        self.summary_ratio.clamp(0, 100)
    }

    /// The three text lines of the stats block.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Original: {}", self.original_chars),
            format!("Summarized: {}", self.summarized_chars),
            format!("Saved: {}%", self.saved_percentage),
        ]
    }
}

fn ratio_percent(part: f64, whole: u64) -> i64 {
    if whole == 0 {
        return 0;
    }
    round_half_up(part / whole as f64 * 100.0)
}

/// Rounds .5 toward positive infinity, as browsers do for `Math.round`.
///
/// `value - floor(value)` is exact, unlike `value + 0.5`, so values just
/// below a half are not pushed over it.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(original: u64, summarized: u64, saved: i64) -> SavingsStats {
        SavingsStats {
            original_chars: original,
            summarized_chars: summarized,
            saved,
            percentage: 0.0,
        }
    }

    #[test]
    fn test_ratios_from_counts() {
        let view = SavingsView::from_stats(&SavingsStats {
            original_chars: 100,
            summarized_chars: 40,
            saved: 60,
            percentage: 60.0,
        });
        assert_eq!(view.summary_ratio, 40);
        assert_eq!(view.saved_percentage, 60);
        assert_eq!(view.bar_width(), 40);
    }

    #[test]
    fn test_zero_original_gives_zero_ratios() {
        let view = SavingsView::from_stats(&stats(0, 25, -25));
        assert_eq!(view.summary_ratio, 0);
        assert_eq!(view.saved_percentage, 0);
        assert_eq!(view.bar_width(), 0);
    }

    #[test]
    fn test_server_percentage_is_ignored() {
        let mut s = stats(200, 50, 150);
        s.percentage = 12.0;
        assert_eq!(SavingsView::from_stats(&s).saved_percentage, 75);
    }

    #[test]
    fn test_rounding_matches_browser() {
        // 1/8 = 12.5% rounds up, -1/8 = -12.5% rounds toward zero
        assert_eq!(SavingsView::from_stats(&stats(8, 1, 7)).summary_ratio, 13);
        assert_eq!(SavingsView::from_stats(&stats(8, 9, -1)).saved_percentage, -12);
        // 2/3 = 66.67%
        assert_eq!(SavingsView::from_stats(&stats(3, 2, 1)).summary_ratio, 67);
    }

    #[test]
    fn test_bar_width_clamped_when_summary_grows() {
        let view = SavingsView::from_stats(&stats(10, 15, -5));
        assert_eq!(view.summary_ratio, 150);
        assert_eq!(view.bar_width(), 100);
        assert_eq!(view.saved_percentage, -50);
    }

    #[test]
    fn test_lines() {
        let view = SavingsView::from_stats(&stats(100, 40, 60));
        assert_eq!(
            view.lines(),
            [
                "Original: 100".to_string(),
                "Summarized: 40".to_string(),
                "Saved: 60%".to_string(),
            ]
        );
    }

    #[test]
    fn test_rounding_just_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.5000000000000001), -1);
    }

    #[test]
    fn test_malformed_fields_are_defaulted() {
        let s: SavingsStats = serde_json::from_str(
            r#"{"original_chars": 100.0, "summarized_chars": "40", "saved": null, "percentage": 60}"#,
        )
        .unwrap();
        assert_eq!(s.original_chars, 100);
        assert_eq!(s.summarized_chars, 0);
        assert_eq!(s.saved, 0);
        assert_eq!(s.percentage, 60.0);
    }

    #[test]
    fn test_negative_count_clamps_to_zero() {
        let s: SavingsStats = serde_json::from_str(r#"{"original_chars": -5}"#).unwrap();
        assert_eq!(s.original_chars, 0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let s: SavingsStats = serde_json::from_str(r#"{"original_chars": 10}"#).unwrap();
        assert_eq!(s.original_chars, 10);
        assert_eq!(s.summarized_chars, 0);
        assert_eq!(s.saved, 0);
    }
}
