//! Review Analyzer - restaurant-level orchestration of review signals.
//!
//! Folds per-review signals into one tally, then derives confidence and a
//! rationale. Verified chains skip review text entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::confidence::{aggregate_confidence, summarize_signals};
use super::signals::{extract_review_signals, SignalTally};
use crate::models::{ChainEntry, ChainMenu, RestaurantRecord};
use crate::scoring::ScoreRouter;

const MAX_KETO_FOODS: usize = 8;
const MAX_CUSTOMIZATIONS: usize = 6;
const MAX_COOKING_METHODS: usize = 4;
const LOW_CARB_ITEM_GRAMS: f64 = 5.0;

/// Result of analyzing one restaurant's reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub review_count: usize,
    pub signals: SignalTally,
    /// `None` when there were no reviews.
    pub keto_confidence: Option<f64>,
    pub summary: String,
    pub found_keto_foods: Vec<String>,
    pub found_customizations: Vec<String>,
    pub found_cooking_methods: Vec<String>,
    pub is_verified_chain: bool,
    pub analyzed_at: DateTime<Utc>,
}

/// Append unseen phrases, keeping first-seen order, up to `cap` entries.
fn union_capped(into: &mut Vec<String>, found: Vec<String>, cap: usize) {
    for phrase in found {
        if into.len() >= cap {
            break;
        }
        if !into.contains(&phrase) {
            into.push(phrase);
        }
    }
}

/// Analyze every review of a restaurant. Blank reviews count toward volume but carry no signals.
pub fn analyze_reviews(texts: &[String]) -> ReviewAnalysis {
    let mut tally = SignalTally::default();
    let mut keto_foods = Vec::new();
    let mut customizations = Vec::new();
    let mut cooking_methods = Vec::new();

    for text in texts.iter().filter(|t| !t.trim().is_empty()) {
        let signals = extract_review_signals(text);
        tally.merge(&signals.tally);
        union_capped(&mut keto_foods, signals.found_keto_foods, MAX_KETO_FOODS);
        union_capped(&mut customizations, signals.found_customizations, MAX_CUSTOMIZATIONS);
        union_capped(&mut cooking_methods, signals.found_cooking_methods, MAX_COOKING_METHODS);
    }

    let review_count = texts.len();
    let keto_confidence = aggregate_confidence(&tally, review_count);
    let summary = summarize_signals(&tally, keto_confidence);

    ReviewAnalysis {
        review_count,
        signals: tally,
        keto_confidence,
        summary,
        found_keto_foods: keto_foods,
        found_customizations: customizations,
        found_cooking_methods: cooking_methods,
        is_verified_chain: false,
        analyzed_at: Utc::now(),
    }
}

/// Analysis for a chain with a verified menu: full confidence, no review scan.
///
/// Callers pass a non-empty menu.
pub fn verified_chain_analysis(chain: &ChainEntry, menu: &ChainMenu) -> ReviewAnalysis {
    let low_carb_count = menu
        .items
        .iter()
        .filter(|i| i.carbs_grams <= LOW_CARB_ITEM_GRAMS)
        .count();

    let best = menu
        .lowest_carb_item()
        .map(|b| {
            format!(
                " Best: {} \u{2014} {}g carbs, {}g protein",
                b.name, b.carbs_grams, b.protein_grams
            )
        })
        .unwrap_or_default();

    let summary = format!(
        "Verified: {} keto options from {} ({} under 5g carbs).{}",
        menu.items.len(),
        chain.display_name,
        low_carb_count,
        best
    );

    ReviewAnalysis {
        review_count: 0,
        signals: SignalTally::default(),
        keto_confidence: Some(1.0),
        summary,
        found_keto_foods: menu
            .items
            .iter()
            .take(MAX_KETO_FOODS)
            .map(|i| i.name.clone())
            .collect(),
        found_customizations: menu.order_tips.clone(),
        found_cooking_methods: Vec::new(),
        is_verified_chain: true,
        analyzed_at: Utc::now(),
    }
}

/// Restaurant-level analyzer that knows about verified chains.
#[derive(Debug, Clone)]
pub struct ReviewAnalyzer {
    router: ScoreRouter,
}

impl ReviewAnalyzer {
    pub fn new(router: ScoreRouter) -> Self {
        Self { router }
    }

    /// Analyze a restaurant's reviews.
    ///
    /// Verified chains short-circuit. Otherwise returns `None` when the record
    /// carries no review texts at all.
    pub fn analyze(&self, record: &RestaurantRecord) -> Option<ReviewAnalysis> {
        if let Some((chain, menu)) = self.router.verified_menu(&record.name) {
            info!(
                "Chain short-circuit for {}, skipping review scan",
                chain.display_name
            );
            return Some(verified_chain_analysis(chain, menu));
        }

        let texts = record.review_texts.as_ref()?;
        let analysis = analyze_reviews(texts);
        info!(
            "Analyzed {} reviews for '{}': confidence {:?}",
            analysis.review_count, record.name, analysis.keto_confidence
        );
        Some(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn texts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyze_reviews_accumulates() {
        let analysis = analyze_reviews(&texts(&[
            "Great keto options, grilled salmon and avocado",
            "",
            "They made it a lettuce wrap, very accommodating. Bacon was perfect.",
        ]));
        assert_eq!(analysis.review_count, 3);
        assert_eq!(analysis.signals.keto_mentions, 1);
        assert!(analysis.signals.customization_mentions >= 1);
        assert_eq!(analysis.found_keto_foods[..2], ["avocado".to_string(), "salmon".to_string()]);
        assert!(analysis.keto_confidence.unwrap() > 0.0);
        assert!(!analysis.is_verified_chain);
    }

    #[test]
    fn test_found_lists_are_capped_and_unique() {
        let review = "avocado bacon eggs steak ribeye sirloin filet salmon fish seafood shrimp";
        let analysis = analyze_reviews(&texts(&[review, review]));
        assert_eq!(analysis.found_keto_foods.len(), MAX_KETO_FOODS);
        let mut deduped = analysis.found_keto_foods.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), MAX_KETO_FOODS);
    }

    #[test]
    fn test_no_reviews() {
        let analysis = analyze_reviews(&[]);
        assert!(analysis.keto_confidence.is_none());
    }

    #[test]
    fn test_verified_summary() {
        let chain = ChainEntry::new("outback", "Outback Steakhouse", "outback", &[]);
        let mut menu = ChainMenu::new(
            "Outback Steakhouse",
            vec![
                MenuItem {
                    name: "Grilled Shrimp".to_string(),
                    carbs_grams: 2.5,
                    protein_grams: 24.0,
                    fat_grams: 8.0,
                    calories: 180.0,
                    order_as_instructions: None,
                    source_verified: true,
                },
                MenuItem {
                    name: "Victoria's Filet".to_string(),
                    carbs_grams: 0.0,
                    protein_grams: 48.0,
                    fat_grams: 18.0,
                    calories: 370.0,
                    order_as_instructions: None,
                    source_verified: true,
                },
            ],
            0.95,
        );
        menu.order_tips = vec!["Swap the potato for broccoli".to_string()];

        let analysis = verified_chain_analysis(&chain, &menu);
        assert_eq!(
            analysis.summary,
            "Verified: 2 keto options from Outback Steakhouse (2 under 5g carbs). \
             Best: Victoria's Filet \u{2014} 0g carbs, 48g protein"
        );
        assert_eq!(analysis.keto_confidence, Some(1.0));
        assert_eq!(analysis.found_customizations, menu.order_tips);
        assert!(analysis.is_verified_chain);
    }
}
