//! Cuisine, price and dining-option classification.

use crate::models::DiningOption;

pub const DEFAULT_CUISINE: &str = "American";
pub const DEFAULT_PRICE_LEVEL: u8 = 2;

/// Name keywords per cuisine, first match wins.
const CUISINE_NAME_KEYWORDS: &[(&str, &[&str])] = &[
    ("Mediterranean", &["mediterranean", "cava", "hummus", "falafel", "shawarma", "pita", "tzatziki"]),
    ("Greek", &["greek", "gyro", "souvlaki", "moussaka"]),
    ("Mexican", &["mexican", "taco", "burrito", "chipotle", "qdoba", "taqueria", "cantina"]),
    ("Italian", &["italian", "pizza", "pasta", "trattoria", "pizzeria", "ristorante"]),
    ("Chinese", &["chinese", "wok", "panda", "dynasty", "mandarin"]),
    ("Japanese", &["japanese", "sushi", "ramen", "hibachi", "teriyaki"]),
    ("Thai", &["thai", "pad thai", "curry"]),
    ("Indian", &["indian", "tandoori", "curry", "biryani", "masala"]),
    ("BBQ", &["bbq", "barbecue", "smokehouse", "brisket", "ribs"]),
    ("Steakhouse", &["steakhouse", "steak house", "chophouse", "prime"]),
    ("Seafood", &["seafood", "fish", "lobster", "oyster", "crab shack"]),
    ("Brazilian", &["brazilian", "churrascaria", "gaucho"]),
    ("Vietnamese", &["vietnamese", "pho", "banh mi"]),
    ("Korean", &["korean", "bbq", "kimchi"]),
    ("Middle Eastern", &["middle eastern", "kebab", "shawarma", "falafel"]),
];

/// Exact type tag to cuisine label.
const CUISINE_TYPE_TAGS: &[(&str, &str)] = &[
    ("steak_house", "Steakhouse"),
    ("seafood_restaurant", "Seafood"),
    ("mexican_restaurant", "Mexican"),
    ("mediterranean_restaurant", "Mediterranean"),
    ("greek_restaurant", "Greek"),
    ("american_restaurant", "American"),
    ("italian_restaurant", "Italian"),
    ("japanese_restaurant", "Japanese"),
    ("chinese_restaurant", "Chinese"),
    ("indian_restaurant", "Indian"),
    ("thai_restaurant", "Thai"),
    ("barbecue_restaurant", "BBQ"),
    ("brazilian_restaurant", "Brazilian"),
    ("vietnamese_restaurant", "Vietnamese"),
    ("korean_restaurant", "Korean"),
    ("middle_eastern_restaurant", "Middle Eastern"),
    ("bar", "Bar & Grill"),
    ("sports_bar", "Sports Bar"),
    ("fast_food_restaurant", "Fast Food"),
    ("sandwich_shop", "Sandwiches"),
    ("hamburger_restaurant", "Burgers"),
];

const PRICE_LEVELS: &[(&str, u8)] = &[
    ("PRICE_LEVEL_FREE", 1),
    ("PRICE_LEVEL_INEXPENSIVE", 1),
    ("PRICE_LEVEL_MODERATE", 2),
    ("PRICE_LEVEL_EXPENSIVE", 3),
    ("PRICE_LEVEL_VERY_EXPENSIVE", 4),
];

/// Cuisine label from name keywords, then the first mapped type tag, else "American".
pub fn classify_cuisine(cuisine_types: &[String], name: &str) -> String {
    let name_lower = name.to_lowercase();

    let by_name = CUISINE_NAME_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name_lower.contains(k)))
        .map(|(cuisine, _)| *cuisine);

    let by_type = || {
        cuisine_types.iter().find_map(|t| {
            CUISINE_TYPE_TAGS
                .iter()
                .find(|(tag, _)| *tag == t.as_str())
                .map(|(_, cuisine)| *cuisine)
        })
    };

    by_name
        .or_else(by_type)
        .unwrap_or(DEFAULT_CUISINE)
        .to_string()
}

/// Numeric price tier 1-4 from the provider's raw value; unknown tiers are moderate.
pub fn price_level(raw: Option<&str>) -> u8 {
    raw.and_then(|r| PRICE_LEVELS.iter().find(|(label, _)| *label == r))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_PRICE_LEVEL)
}

pub fn dining_options(cuisine_types: &[String], name: &str) -> Vec<DiningOption> {
    let types: Vec<String> = cuisine_types.iter().map(|t| t.to_lowercase()).collect();
    let has_type = |tag: &str| types.iter().any(|t| t == tag);
    let name = name.to_lowercase();

    let mut options = vec![DiningOption::DineIn, DiningOption::Takeout];

    if has_type("drive_through") || name.contains("drive-through") || name.contains("drive thru") {
        options.push(DiningOption::DriveThrough);
    }

    if has_type("fast_food_restaurant") || has_type("meal_takeaway") {
        options.push(DiningOption::Delivery);
    }

    if has_type("bar")
        || has_type("outdoor_restaurant")
        || ["patio", "garden", "outdoor"].iter().any(|k| name.contains(k))
    {
        options.push(DiningOption::OutdoorSeating);
    }

    options
}
