//! Confidence Aggregation.
//!
//! Turns accumulated review signals into a 0-1 keto confidence and a short
//! human-readable rationale.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::signals::{SignalCategory, SignalTally};

/// Assumed ceiling of mentions per positive category when normalizing.
const MENTIONS_CEILING: f64 = 3.0;
/// Reviews needed for the full volume boost.
const REVIEWS_FOR_FULL_BOOST: f64 = 20.0;
const MAX_REVIEW_BOOST: f64 = 0.2;
/// Keto-food mentions must exceed this to be reported in the summary.
const KETO_FOOD_SUMMARY_THRESHOLD: u32 = 3;

pub const NO_SIGNALS_SUMMARY: &str = "No specific keto signals found in reviews";
const SUMMARY_SEPARATOR: &str = " \u{2022} ";

/// Confidence plus rationale for one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceResult {
    /// `None` when there were no reviews to judge from.
    pub confidence: Option<f64>,
    pub rationale: String,
}

fn max_possible_score() -> f64 {
    SignalCategory::ALL
        .iter()
        .map(|c| c.weight())
        .filter(|w| *w > 0.0)
        .map(|w| w.abs() * MENTIONS_CEILING)
        .sum()
}

/// Weighted, volume-boosted confidence in [0, 1]; `None` for zero reviews.
pub fn aggregate_confidence(tally: &SignalTally, review_count: usize) -> Option<f64> {
    if review_count == 0 {
        return None;
    }

    let weighted: f64 = SignalCategory::ALL
        .iter()
        .map(|c| f64::from(tally.get(*c)) * c.weight())
        .sum();

    let base = weighted / max_possible_score();
    let boost = (review_count as f64 / REVIEWS_FOR_FULL_BOOST).min(MAX_REVIEW_BOOST);

    Some((base + boost).clamp(0.0, 1.0))
}

fn plural(count: u32) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Bullet summary of the notable signals, or a fixed "no signals" line.
pub fn summarize_signals(tally: &SignalTally, confidence: Option<f64>) -> String {
    let mut parts = Vec::new();

    let keto = tally.keto_mentions;
    if keto > 0 {
        parts.push(format!("{} keto/low-carb mention{}", keto, plural(keto)));
    }

    let custom = tally.customization_mentions;
    if custom > 0 {
        parts.push(format!("{} customization option{}", custom, plural(custom)));
    }

    let accommodating = tally.accommodating_mentions;
    if accommodating > 0 {
        parts.push(format!(
            "{} mention{} of accommodating service",
            accommodating,
            plural(accommodating)
        ));
    }

    if tally.keto_food_mentions > KETO_FOOD_SUMMARY_THRESHOLD {
        parts.push(format!(
            "{} keto-friendly foods mentioned",
            tally.keto_food_mentions
        ));
    }

    let hidden = tally.hidden_carb_mentions;
    if hidden > 0 {
        parts.push(format!(
            "[WARN] {} warning{} about hidden carbs",
            hidden,
            plural(hidden)
        ));
    }

    debug!(
        "Summarized {} signal clauses (confidence: {:?})",
        parts.len(),
        confidence
    );

    if parts.is_empty() {
        NO_SIGNALS_SUMMARY.to_string()
    } else {
        parts.join(SUMMARY_SEPARATOR)
    }
}

/// Confidence and rationale together.
pub fn evaluate_confidence(tally: &SignalTally, review_count: usize) -> ConfidenceResult {
    let confidence = aggregate_confidence(tally, review_count);
    ConfidenceResult {
        confidence,
        rationale: summarize_signals(tally, confidence),
    }
}
