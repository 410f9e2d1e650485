//! Heuristic Scoring.
//!
//! Estimates a keto score for restaurants without a verified menu, from name
//! keywords, type tags and rating. All constants live in the tables below;
//! rule order inside each table is precedence order.

pub const HEURISTIC_SCORE_MIN: f64 = 0.20;
pub const HEURISTIC_SCORE_MAX: f64 = 0.92;

/// Venue types that are carb-centric no matter what the name says.
const HIGH_CARB_VENUE_TYPES: &[&str] = &[
    "juice_shop",
    "acai_shop",
    "smoothie_shop",
    "ice_cream_shop",
    "bakery",
    "dessert_shop",
    "dessert_restaurant",
    "candy_store",
    "donut_shop",
    "bagel_shop",
    "cookie_shop",
];

/// Fixed score for high-carb venues, inside the [0.20, 0.35] band.
const HIGH_CARB_VENUE_SCORE: f64 = 0.25;
const HIGH_CARB_VENUE_MAX: f64 = 0.35;

const BASE_SCORE: f64 = 0.55;

/// Name keywords of structurally carb-heavy cuisines; replaces the base score.
const NAME_CUISINE_OVERRIDES: &[(&[&str], f64)] = &[
    (&["italian", "trattoria", "pizzeria", "ristorante"], 0.48),
    (&["chinese", "wok", "mandarin"], 0.50),
    (&["thai"], 0.55),
    (&["sushi", "ramen"], 0.58),
    (&["indian", "tandoori"], 0.60),
];

/// Type tag to base score, consulted only without a name override.
const TYPE_BASE_SCORES: &[(&str, f64)] = &[
    ("steak_house", 0.80),
    ("barbecue_restaurant", 0.75),
    ("brazilian_restaurant", 0.75),
    ("seafood_restaurant", 0.72),
    ("mediterranean_restaurant", 0.68),
    ("greek_restaurant", 0.68),
    ("indian_restaurant", 0.60),
    ("mexican_restaurant", 0.58),
    ("japanese_restaurant", 0.58),
    ("american_restaurant", 0.58),
    ("korean_restaurant", 0.57),
    ("thai_restaurant", 0.55),
    ("chinese_restaurant", 0.50),
    ("italian_restaurant", 0.48),
    ("hamburger_restaurant", 0.55),
];

/// Cumulative adjustment applied when the name contains any keyword and none of `unless`.
struct NameRule {
    any: &'static [&'static str],
    unless: &'static [&'static str],
    delta: f64,
}

const fn rule(any: &'static [&'static str], delta: f64) -> NameRule {
    NameRule { any, unless: &[], delta }
}

const NAME_RULES: &[NameRule] = &[
    // bonuses
    rule(&["grill", "grille"], 0.10),
    rule(&["steak", "steakhouse"], 0.15),
    rule(&["bbq", "barbecue", "smokehouse"], 0.12),
    rule(&["seafood", "fish"], 0.10),
    rule(&["meat", "butcher"], 0.10),
    rule(&["salad"], 0.08),
    rule(&["protein", "fit", "healthy"], 0.10),
    rule(&["wings", "wing"], 0.08),
    // penalties
    rule(&["pizza"], -0.40),
    rule(&["pasta", "noodle"], -0.35),
    rule(&["bakery", "bread"], -0.40),
    rule(&["donut", "doughnut"], -0.50),
    rule(&["ice cream", "frozen yogurt"], -0.40),
    rule(&["pancake", "waffle"], -0.40),
    rule(&["smoothie", "juice", "acai"], -0.40),
    NameRule { any: &["berry"], unless: &["dingle"], delta: -0.25 },
    rule(&["bubble tea", "boba"], -0.35),
    rule(&["froyo", "yogurt"], -0.30),
    rule(&["buffet"], -0.20),
    rule(&["casino"], -0.30),
    NameRule { any: &["cafe"], unless: &["grill"], delta: -0.10 },
];

const TYPE_PENALTIES: &[(&str, f64)] = &[
    ("pizza_restaurant", -0.35),
    ("fast_food_restaurant", -0.05),
];

/// Whether any type tag marks a carb-centric venue.
pub fn is_high_carb_venue(cuisine_types: &[String]) -> bool {
    cuisine_types
        .iter()
        .any(|t| HIGH_CARB_VENUE_TYPES.contains(&t.as_str()))
}

/// Base score from a name cuisine override, else the type table, else 0.55.
///
/// Type tags are matched as substrings of the space-joined tag list.
fn base_score(name_lower: &str, types_joined: &str) -> f64 {
    let override_score = NAME_CUISINE_OVERRIDES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name_lower.contains(k)))
        .map(|(_, score)| *score);

    override_score
        .or_else(|| {
            TYPE_BASE_SCORES
                .iter()
                .find(|(tag, _)| types_joined.contains(tag))
                .map(|(_, score)| *score)
        })
        .unwrap_or(BASE_SCORE)
}

fn name_adjustment(name_lower: &str) -> f64 {
    NAME_RULES
        .iter()
        .filter(|r| {
            r.any.iter().any(|k| name_lower.contains(k))
                && !r.unless.iter().any(|k| name_lower.contains(k))
        })
        .map(|r| r.delta)
        .sum()
}

fn type_adjustment(types_joined: &str) -> f64 {
    TYPE_PENALTIES
        .iter()
        .filter(|(tag, _)| types_joined.contains(tag))
        .map(|(_, delta)| *delta)
        .sum()
}

fn rating_adjustment(rating: f64) -> f64 {
    if rating >= 4.5 {
        0.05
    } else if rating >= 4.0 {
        0.03
    } else if rating < 3.5 {
        -0.03
    } else {
        0.0
    }
}

/// Heuristic keto score in [0.20, 0.92].
pub fn score_heuristic(name: &str, cuisine_types: &[String], rating: f64) -> f64 {
    if is_high_carb_venue(cuisine_types) {
        return HIGH_CARB_VENUE_SCORE.clamp(HEURISTIC_SCORE_MIN, HIGH_CARB_VENUE_MAX);
    }

    let name_lower = name.to_lowercase();
    let types_joined = cuisine_types.join(" ").to_lowercase();

    let score = base_score(&name_lower, &types_joined)
        + name_adjustment(&name_lower)
        + type_adjustment(&types_joined)
        + rating_adjustment(rating);

    score.clamp(HEURISTIC_SCORE_MIN, HEURISTIC_SCORE_MAX)
}
