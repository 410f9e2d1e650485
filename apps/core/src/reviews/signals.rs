//! Review Signal Extraction.
//!
//! Bag-of-phrases scan of review text. Each category is an ordered phrase list;
//! a phrase counts once per review if it appears anywhere as a substring.
//! Substring matching is intentional and has known false positives
//! ("egg" in "eggplant", "rice" in "price").

use serde::{Deserialize, Serialize};

/// The nine evidence categories, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Keto,
    Customization,
    Accommodating,
    KetoFood,
    HealthyCooking,
    Dietary,
    Portion,
    HiddenCarb,
    HighCarb,
}

impl SignalCategory {
    pub const ALL: [SignalCategory; 9] = [
        SignalCategory::Keto,
        SignalCategory::Customization,
        SignalCategory::Accommodating,
        SignalCategory::KetoFood,
        SignalCategory::HealthyCooking,
        SignalCategory::Dietary,
        SignalCategory::Portion,
        SignalCategory::HiddenCarb,
        SignalCategory::HighCarb,
    ];

    /// Trigger phrases, lowercase.
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            SignalCategory::Keto => &["keto", "ketogenic", "low carb", "low-carb", "lchf", "paleo"],
            SignalCategory::Customization => &[
                "lettuce wrap", "lettuce wrapped", "protein style",
                "bunless", "without the bun", "skip the bun",
                "cauliflower rice", "cauli rice",
                "no bread", "without bread", "skip the bread",
                "no tortilla", "no wrap",
                "bowl instead", "make it a bowl",
                "substitute", "substitution", "swap",
                "no pasta", "no noodles", "no rice",
                "no bun", "without bun",
                "no ketchup", "no sauce",
                "instead of", "made it without", "hold the", "remove the",
                "can i get", "can you make",
            ],
            SignalCategory::Accommodating => &[
                "accommodating", "accommodated",
                "willing to", "happy to modify", "no problem",
                "very flexible", "flexible with",
                "made it without", "left off", "held the",
                "custom", "customize", "modification",
            ],
            SignalCategory::KetoFood => &[
                "avocado", "bacon", "egg", "eggs",
                "steak", "ribeye", "sirloin", "filet",
                "salmon", "fish", "seafood", "shrimp",
                "chicken breast", "grilled chicken",
                "bunless burger", "burger bowl", "protein bowl",
                "salad", "greens", "vegetables", "veggies",
                "cheese", "butter", "olive oil",
                "wings", "drumstick",
            ],
            SignalCategory::HealthyCooking => &[
                "grilled", "baked", "roasted", "steamed",
                "sautéed", "sauteed", "pan-seared", "broiled",
            ],
            SignalCategory::Dietary => &[
                "gluten free", "gluten-free", "dairy free", "sugar free",
                "diet friendly", "dietary restrictions", "dietary needs",
                "nutrition", "macros", "calories", "carbs",
            ],
            SignalCategory::Portion => &[
                "huge portion", "large portion", "generous portion",
                "filling", "substantial", "plenty of protein",
            ],
            SignalCategory::HiddenCarb => &[
                "breaded", "battered", "fried coating",
                "sweet sauce", "teriyaki", "bbq sauce", "honey",
                "glazed", "candied", "sweetened",
                "flour tortilla", "corn tortilla",
            ],
            SignalCategory::HighCarb => &[
                "pasta", "noodles", "rice", "bread", "bun",
                "potato", "fries", "chips",
                "pizza", "dough",
                "dessert", "cake", "cookie", "pastry",
                "pancake", "waffle", "toast",
            ],
        }
    }

    /// Weight in the confidence model; negative categories count against keto.
    pub fn weight(&self) -> f64 {
        match self {
            SignalCategory::Keto => 3.0,
            SignalCategory::Customization => 2.5,
            SignalCategory::Accommodating => 2.0,
            SignalCategory::KetoFood => 1.0,
            SignalCategory::HealthyCooking => 0.8,
            SignalCategory::Dietary => 0.7,
            SignalCategory::Portion => 0.5,
            SignalCategory::HiddenCarb => -1.5,
            SignalCategory::HighCarb => -0.8,
        }
    }
}

/// Per-restaurant counters, accumulated across reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalTally {
    pub keto_mentions: u32,
    pub customization_mentions: u32,
    pub accommodating_mentions: u32,
    pub keto_food_mentions: u32,
    pub healthy_cooking_mentions: u32,
    pub dietary_mentions: u32,
    pub portion_mentions: u32,
    pub hidden_carb_mentions: u32,
    pub high_carb_mentions: u32,
}

impl SignalTally {
    pub fn get(&self, category: SignalCategory) -> u32 {
        match category {
            SignalCategory::Keto => self.keto_mentions,
            SignalCategory::Customization => self.customization_mentions,
            SignalCategory::Accommodating => self.accommodating_mentions,
            SignalCategory::KetoFood => self.keto_food_mentions,
            SignalCategory::HealthyCooking => self.healthy_cooking_mentions,
            SignalCategory::Dietary => self.dietary_mentions,
            SignalCategory::Portion => self.portion_mentions,
            SignalCategory::HiddenCarb => self.hidden_carb_mentions,
            SignalCategory::HighCarb => self.high_carb_mentions,
        }
    }

    fn slot(&mut self, category: SignalCategory) -> &mut u32 {
        match category {
            SignalCategory::Keto => &mut self.keto_mentions,
            SignalCategory::Customization => &mut self.customization_mentions,
            SignalCategory::Accommodating => &mut self.accommodating_mentions,
            SignalCategory::KetoFood => &mut self.keto_food_mentions,
            SignalCategory::HealthyCooking => &mut self.healthy_cooking_mentions,
            SignalCategory::Dietary => &mut self.dietary_mentions,
            SignalCategory::Portion => &mut self.portion_mentions,
            SignalCategory::HiddenCarb => &mut self.hidden_carb_mentions,
            SignalCategory::HighCarb => &mut self.high_carb_mentions,
        }
    }

    pub fn set(&mut self, category: SignalCategory, count: u32) {
        *self.slot(category) = count;
    }

    /// Add another tally into this one. Counters saturate rather than wrap.
    pub fn merge(&mut self, other: &SignalTally) {
        for category in SignalCategory::ALL {
            let slot = self.slot(category);
            *slot = slot.saturating_add(other.get(category));
        }
    }

    pub fn is_empty(&self) -> bool {
        SignalCategory::ALL.iter().all(|c| self.get(*c) == 0)
    }
}

/// Signals from a single review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSignals {
    #[serde(flatten)]
    pub tally: SignalTally,
    pub found_keto_foods: Vec<String>,
    pub found_customizations: Vec<String>,
    pub found_cooking_methods: Vec<String>,
}

fn matched_phrases(text: &str, category: SignalCategory) -> Vec<String> {
    category
        .phrases()
        .iter()
        .filter(|phrase| text.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}

/// Count distinct phrase hits per category in one review.
pub fn extract_review_signals(text: &str) -> ReviewSignals {
    let folded = text.to_lowercase();
    let mut signals = ReviewSignals::default();

    for category in SignalCategory::ALL {
        let found = matched_phrases(&folded, category);
        signals.tally.set(category, found.len() as u32);
        match category {
            SignalCategory::KetoFood => signals.found_keto_foods = found,
            SignalCategory::Customization => signals.found_customizations = found,
            SignalCategory::HealthyCooking => signals.found_cooking_methods = found,
            _ => {}
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bunless_review() {
        let signals = extract_review_signals(
            "I asked for no bun and they were very accommodating, lots of bacon and eggs",
        );
        assert!(signals.tally.customization_mentions >= 1);
        assert!(signals.found_customizations.contains(&"no bun".to_string()));
        assert!(signals.tally.accommodating_mentions >= 1);
        assert!(signals.tally.keto_food_mentions >= 2);
        assert!(signals.found_keto_foods.contains(&"bacon".to_string()));
        assert!(signals.found_keto_foods.contains(&"egg".to_string()));
    }

    #[test]
    fn test_repeated_phrase_counts_once() {
        let signals = extract_review_signals("Keto keto KETO, so keto.");
        assert_eq!(signals.tally.keto_mentions, 1);
    }

    #[test]
    fn test_case_folding() {
        let signals = extract_review_signals("GRILLED salmon, STEAMED broccoli");
        assert_eq!(signals.found_cooking_methods, vec!["grilled", "steamed"]);
    }

    #[test]
    fn test_substring_false_positives_are_kept() {
        let signals = extract_review_signals("Fair price for the eggplant");
        assert_eq!(signals.tally.high_carb_mentions, 1); // "rice" in "price"
        assert!(signals.found_keto_foods.contains(&"egg".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let signals = extract_review_signals("");
        assert!(signals.tally.is_empty());
        assert!(signals.found_keto_foods.is_empty());
    }

    #[test]
    fn test_merge_accumulates() {
        let mut total = SignalTally::default();
        total.merge(&extract_review_signals("keto friendly, grilled steak").tally);
        total.merge(&extract_review_signals("low carb options, breaded wings").tally);
        assert_eq!(total.keto_mentions, 2);
        assert_eq!(total.hidden_carb_mentions, 1);
        assert_eq!(total.healthy_cooking_mentions, 1);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_value(SignalTally {
            keto_mentions: 2,
            ..SignalTally::default()
        })
        .unwrap();
        assert_eq!(json["ketoMentions"], 2);
        assert_eq!(json["hiddenCarbMentions"], 0);
    }
}
