//! Fallback keto dish suggestions per cuisine.

use crate::models::{ScoreResult, ScoreSource};

const CUISINE_SUGGESTIONS: &[(&str, [&str; 4])] = &[
    ("Steakhouse", ["Ribeye Steak", "Filet Mignon", "Caesar Salad (no croutons)", "Grilled Asparagus"]),
    ("Seafood", ["Grilled Salmon", "Shrimp Scampi (no pasta)", "Lobster Tail", "Steamed Crab Legs"]),
    ("BBQ", ["Smoked Brisket (no sauce)", "Pulled Pork (no bun)", "Dry Rub Ribs", "Smoked Wings"]),
    ("Mexican", ["Carne Asada", "Fajitas (no tortilla)", "Carnitas Bowl (no rice)", "Guacamole & Pork Rinds"]),
    ("Mediterranean", ["Greek Salad", "Lamb Chops", "Grilled Chicken Souvlaki", "Tzatziki with Veggies"]),
    ("Greek", ["Greek Salad", "Lamb Chops", "Grilled Chicken Souvlaki", "Tzatziki with Veggies"]),
    ("Italian", ["Chicken Piccata (no pasta)", "Antipasto Platter", "Grilled Branzino", "Caprese Salad"]),
    ("American", ["Bunless Burger", "Grilled Chicken Breast", "Cobb Salad", "Buffalo Wings"]),
    ("Japanese", ["Sashimi Platter", "Beef Negimaki", "Edamame", "Grilled Salmon Teriyaki (no rice)"]),
    ("Chinese", ["Steamed Fish", "Beef & Broccoli (no rice)", "Egg Drop Soup", "Peking Duck (no pancakes)"]),
    ("Indian", ["Tandoori Chicken", "Lamb Seekh Kebab", "Paneer Tikka", "Saag (no naan)"]),
    ("Thai", ["Larb (meat salad)", "Tom Yum Soup", "Grilled Satay", "Green Curry (no rice)"]),
    ("Brazilian", ["Picanha", "Grilled Chicken Hearts", "Bacon-Wrapped Filet", "Mixed Grilled Meats"]),
];

const GENERIC_SUGGESTIONS: [&str; 4] = [
    "Grilled Protein",
    "House Salad (no croutons)",
    "Steamed Vegetables",
    "Bunless Burger",
];

/// Dishes that are usually keto-friendly at this cuisine.
pub fn basic_keto_suggestions(cuisine: &str) -> Vec<String> {
    CUISINE_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == cuisine)
        .map(|(_, dishes)| dishes)
        .unwrap_or(&GENERIC_SUGGESTIONS)
        .iter()
        .map(|d| d.to_string())
        .collect()
}

/// Cuisine suggestions for restaurants scored without a verified menu.
pub fn suggestions_for(result: &ScoreResult) -> Option<Vec<String>> {
    match result.source {
        ScoreSource::VerifiedChain => None,
        ScoreSource::Heuristic => Some(basic_keto_suggestions(&result.cuisine)),
    }
}
