//! Review Module Tests
//!
//! Tests for signal extraction, confidence aggregation and the
//! restaurant-level analyzer.

use std::sync::Arc;

use crate::models::{ChainMenu, MenuItem, RestaurantRecord, ScoreSource};
use crate::reviews::{
    aggregate_confidence, evaluate_confidence, extract_review_signals, summarize_signals,
    ReviewAnalyzer, SignalCategory, SignalTally, NO_SIGNALS_SUMMARY,
};
use crate::scoring::{ChainRegistry, MenuCatalog, ScoreRouter};

fn mixed_tally() -> SignalTally {
    SignalTally {
        customization_mentions: 2,
        keto_food_mentions: 5,
        healthy_cooking_mentions: 1,
        high_carb_mentions: 3,
        ..SignalTally::default()
    }
}

#[cfg(test)]
mod extraction_tests {
    use super::*;

    #[test]
    fn test_no_bun_accommodating_review() {
        let signals = extract_review_signals(
            "I asked for no bun and they were very accommodating, lots of bacon and eggs",
        );
        assert!(signals.tally.customization_mentions >= 1);
        assert!(signals.tally.accommodating_mentions >= 1);
        assert!(signals.tally.keto_food_mentions >= 2);
    }

    #[test]
    fn test_every_category_detected() {
        let text = "Keto heaven. Lettuce wrap was no problem. Grilled steak, huge portion. \
                    Gluten free menu. Skip the teriyaki and the fries.";
        let signals = extract_review_signals(text);
        for category in SignalCategory::ALL {
            assert!(
                signals.tally.get(category) >= 1,
                "{:?} not detected",
                category
            );
        }
    }
}

#[cfg(test)]
mod confidence_tests {
    use super::*;

    #[test]
    fn test_zero_reviews_means_no_opinion() {
        let tallies = [
            SignalTally::default(),
            mixed_tally(),
            SignalTally {
                keto_mentions: 50,
                ..SignalTally::default()
            },
        ];
        for tally in tallies {
            assert_eq!(aggregate_confidence(&tally, 0), None);
        }
    }

    #[test]
    fn test_monotonic_in_keto_mentions() {
        for reviews in [1, 5, 40] {
            let mut previous = f64::MIN;
            for keto in 0..15 {
                let tally = SignalTally {
                    keto_mentions: keto,
                    ..mixed_tally()
                };
                let confidence = aggregate_confidence(&tally, reviews).unwrap();
                assert!(
                    confidence >= previous,
                    "confidence dropped at {} keto mentions",
                    keto
                );
                previous = confidence;
            }
        }
    }

    #[test]
    fn test_monotonic_in_hidden_carb_mentions() {
        for reviews in [1, 5, 40] {
            let mut previous = f64::MAX;
            for hidden in 0..15 {
                let tally = SignalTally {
                    hidden_carb_mentions: hidden,
                    ..mixed_tally()
                };
                let confidence = aggregate_confidence(&tally, reviews).unwrap();
                assert!(
                    confidence <= previous,
                    "confidence rose at {} hidden-carb mentions",
                    hidden
                );
                previous = confidence;
            }
        }
    }

    #[test]
    fn test_confidence_within_unit_interval() {
        let extremes = [
            SignalTally {
                hidden_carb_mentions: 100,
                high_carb_mentions: 100,
                ..SignalTally::default()
            },
            SignalTally {
                keto_mentions: 100,
                customization_mentions: 100,
                accommodating_mentions: 100,
                ..SignalTally::default()
            },
        ];
        for tally in extremes {
            let confidence = aggregate_confidence(&tally, 500).unwrap();
            assert!((0.0..=1.0).contains(&confidence));
        }
    }

    #[test]
    fn test_summary_and_rationale_agree() {
        let tally = mixed_tally();
        let result = evaluate_confidence(&tally, 4);
        assert_eq!(result.rationale, summarize_signals(&tally, result.confidence));
        assert!(result.rationale.contains("2 customization options"));
        assert!(result.rationale.contains("5 keto-friendly foods mentioned"));
    }

    #[test]
    fn test_only_non_reported_categories_yield_fixed_summary() {
        let tally = SignalTally {
            keto_food_mentions: 3,
            high_carb_mentions: 7,
            ..SignalTally::default()
        };
        assert_eq!(summarize_signals(&tally, Some(0.1)), NO_SIGNALS_SUMMARY);
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    fn analyzer() -> ReviewAnalyzer {
        let mut catalog = MenuCatalog::new();
        catalog.insert(
            "chipotle",
            ChainMenu::new(
                "Chipotle",
                vec![MenuItem {
                    name: "Carnitas Salad Bowl".to_string(),
                    carbs_grams: 6.0,
                    protein_grams: 27.0,
                    fat_grams: 38.0,
                    calories: 510.0,
                    order_as_instructions: Some("no rice, no beans".to_string()),
                    source_verified: true,
                }],
                0.8,
            ),
        );
        let router = ScoreRouter::new(Arc::new(ChainRegistry::builtin()), Arc::new(catalog));
        ReviewAnalyzer::new(router)
    }

    #[test]
    fn test_verified_chain_ignores_reviews() {
        let mut record = RestaurantRecord::new("Chipotle Mexican Grill", &[], Some(4.1));
        record.review_texts = Some(vec!["Breaded, battered, glazed and candied".to_string()]);

        let analysis = analyzer().analyze(&record).unwrap();
        assert!(analysis.is_verified_chain);
        assert_eq!(analysis.keto_confidence, Some(1.0));
        assert!(analysis.signals.is_empty());
        assert!(analysis.summary.starts_with("Verified: 1 keto options from Chipotle"));
    }

    #[test]
    fn test_invalid_chain_menu_is_not_verified() {
        let mut catalog = MenuCatalog::new();
        catalog.insert(
            "kfc",
            ChainMenu::new(
                "KFC",
                vec![MenuItem {
                    name: "Drumstick".to_string(),
                    carbs_grams: f64::NAN,
                    protein_grams: 1.0,
                    fat_grams: 8.0,
                    calories: 120.0,
                    order_as_instructions: None,
                    source_verified: false,
                }],
                0.6,
            ),
        );
        let router = ScoreRouter::new(Arc::new(ChainRegistry::builtin()), Arc::new(catalog));
        let analyzer = ReviewAnalyzer::new(router.clone());

        let mut record = RestaurantRecord::new("KFC", &["fast_food_restaurant"], Some(3.8));
        record.review_texts = Some(vec!["Grilled chicken, no problem skipping the biscuit".to_string()]);

        let score = router.score(&record);
        assert_eq!(score.source, ScoreSource::Heuristic);
        assert!(score.is_chain);
        assert!(router.verified_menu("KFC").is_none());

        let analysis = analyzer.analyze(&record).unwrap();
        assert!(!analysis.is_verified_chain);
        assert_eq!(analysis.review_count, 1);
        assert_ne!(analysis.keto_confidence, Some(1.0));
    }

    #[test]
    fn test_record_without_reviews_is_skipped() {
        let record = RestaurantRecord::new("Ember & Ash", &["steak_house"], None);
        assert!(analyzer().analyze(&record).is_none());
    }

    #[test]
    fn test_empty_review_list_has_no_confidence() {
        let mut record = RestaurantRecord::new("Ember & Ash", &["steak_house"], None);
        record.review_texts = Some(vec![]);
        let analysis = analyzer().analyze(&record).unwrap();
        assert_eq!(analysis.review_count, 0);
        assert_eq!(analysis.keto_confidence, None);
        assert_eq!(analysis.summary, NO_SIGNALS_SUMMARY);
    }

    #[test]
    fn test_unverified_restaurant_reviews_are_scanned() {
        let mut record = RestaurantRecord::new("Ember & Ash", &["steak_house"], None);
        record.review_texts = Some(vec![
            "Best keto dinner in town, ribeye with butter".to_string(),
            "They swapped the potato for broccoli, no problem at all".to_string(),
        ]);
        let analysis = analyzer().analyze(&record).unwrap();
        assert!(!analysis.is_verified_chain);
        assert_eq!(analysis.review_count, 2);
        assert_eq!(analysis.signals.keto_mentions, 1);
        assert!(analysis.keto_confidence.unwrap() > 0.0);
    }
}
