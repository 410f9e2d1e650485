use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Naturalness prior assumed when a menu does not carry one.
pub const DEFAULT_NATURALNESS_PRIOR: f64 = 0.70;

/// Rating assumed for restaurants that have not been rated yet.
pub const DEFAULT_RATING: f64 = 4.0;

fn default_naturalness_prior() -> f64 {
    DEFAULT_NATURALNESS_PRIOR
}

/// A recognized restaurant brand, matched by a lowercase name substring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChainEntry {
    /// Lowercase substring searched for in restaurant names.
    #[validate(length(min = 1))]
    pub match_key: String,
    /// Canonical brand name shown to users.
    #[validate(length(min = 1))]
    pub display_name: String,
    /// Key into the menu catalog, if the chain has curated menu data.
    pub menu_key: Option<String>,
    /// Ordered queries for an external nutrition lookup.
    pub sample_queries: Vec<String>,
}

impl ChainEntry {
    pub fn new(match_key: &str, display_name: &str, menu_key: &str, sample_queries: &[&str]) -> Self {
        Self {
            match_key: match_key.to_string(),
            display_name: display_name.to_string(),
            menu_key: Some(menu_key.to_string()),
            sample_queries: sample_queries.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// A single verified menu item with its macros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "carbs")]
    #[validate(range(min = 0.0))]
    pub carbs_grams: f64,
    #[serde(rename = "protein", default)]
    #[validate(range(min = 0.0))]
    pub protein_grams: f64,
    #[serde(rename = "fat", default)]
    #[validate(range(min = 0.0))]
    pub fat_grams: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub calories: f64,
    /// How to order the item to make it keto (e.g. "no bun").
    #[serde(rename = "orderAs", default)]
    pub order_as_instructions: Option<String>,
    #[serde(rename = "verified", default)]
    pub source_verified: bool,
}

impl MenuItem {
    /// Validates ranges and rejects NaN or infinite macros, which range checks let through.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        let macros = [
            ("carbs", self.carbs_grams),
            ("protein", self.protein_grams),
            ("fat", self.fat_grams),
            ("calories", self.calories),
        ];
        for (field, value) in macros {
            if !value.is_finite() {
                return Err(AppError::Validation(format!(
                    "menu item '{}' has non-finite {}",
                    self.name, field
                )));
            }
        }
        Ok(())
    }
}

/// Curated menu for one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainMenu {
    pub chain_name: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub order_tips: Vec<String>,
    #[serde(rename = "combos", default)]
    pub items: Vec<MenuItem>,
    /// Estimate of how low-carb the unmodified menu is, in [0, 1].
    #[serde(rename = "ketoNaturalness", default = "default_naturalness_prior")]
    pub naturalness_prior: f64,
}

impl ChainMenu {
    pub fn new(chain_name: &str, items: Vec<MenuItem>, naturalness_prior: f64) -> Self {
        Self {
            chain_name: chain_name.to_string(),
            source: None,
            last_updated: None,
            order_tips: Vec::new(),
            items,
            naturalness_prior,
        }
    }

    /// Checks the prior and every item. An empty item list is allowed here;
    /// scoring rejects it separately.
    pub fn check(&self) -> Result<(), AppError> {
        if !(0.0..=1.0).contains(&self.naturalness_prior) {
            return Err(AppError::Validation(format!(
                "naturalness prior for '{}' must be within [0, 1], got {}",
                self.chain_name, self.naturalness_prior
            )));
        }
        self.items.iter().try_for_each(MenuItem::check)
    }

    /// Item with the fewest carbs; ties keep menu order.
    pub fn lowest_carb_item(&self) -> Option<&MenuItem> {
        self.items.iter().fold(None, |best: Option<&MenuItem>, item| match best {
            Some(b) if b.carbs_grams <= item.carbs_grams => Some(b),
            _ => Some(item),
        })
    }
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Restaurant candidate as supplied by the search layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Cuisine/type tags in the order the provider lists them.
    #[serde(default, alias = "types")]
    pub cuisine_types: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Raw provider price tier, e.g. `PRICE_LEVEL_MODERATE`.
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub review_texts: Option<Vec<String>>,
}

impl RestaurantRecord {
    pub fn new(name: &str, cuisine_types: &[&str], rating: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            cuisine_types: cuisine_types.iter().map(|t| t.to_string()).collect(),
            rating,
            ..Self::default()
        }
    }

    /// Rating used for scoring. Missing, zero and non-finite ratings mean "unrated".
    pub fn effective_rating(&self) -> f64 {
        self.rating
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(DEFAULT_RATING)
    }
}

/// Which scorer produced a keto score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    VerifiedChain,
    Heuristic,
}

/// Ways a customer can be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiningOption {
    #[serde(rename = "Dine-in")]
    DineIn,
    #[serde(rename = "Takeout")]
    Takeout,
    #[serde(rename = "Drive-through")]
    DriveThrough,
    #[serde(rename = "Delivery")]
    Delivery,
    #[serde(rename = "Outdoor Seating")]
    OutdoorSeating,
}

impl DiningOption {
    pub fn label(&self) -> &'static str {
        match self {
            DiningOption::DineIn => "Dine-in",
            DiningOption::Takeout => "Takeout",
            DiningOption::DriveThrough => "Drive-through",
            DiningOption::Delivery => "Delivery",
            DiningOption::OutdoorSeating => "Outdoor Seating",
        }
    }
}

/// Outcome of routing one restaurant through the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0.30-0.95 on the verified chain path, 0.20-0.92 on the heuristic path.
    pub keto_score: f64,
    pub cuisine: String,
    /// True whenever the name matched the chain registry, even if the menu was unusable.
    pub is_chain: bool,
    pub chain_name: Option<String>,
    pub source: ScoreSource,
    /// 1 (cheap) to 4 (very expensive).
    pub price_level: u8,
    pub dining_options: Vec<DiningOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, carbs: f64) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            carbs_grams: carbs,
            protein_grams: 20.0,
            fat_grams: 10.0,
            calories: 250.0,
            order_as_instructions: None,
            source_verified: true,
        }
    }

    #[test]
    fn test_negative_carbs_rejected() {
        let err = item("Patty", -1.0).check().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_nan_carbs_rejected() {
        let err = item("Patty", f64::NAN).check().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("carbs")));
    }

    #[test]
    fn test_menu_json_defaults() {
        let json = r#"{
            "chainName": "Outback Steakhouse",
            "combos": [{ "name": "Ribeye", "carbs": 0, "protein": 60, "fat": 40, "calories": 640 }]
        }"#;
        let menu: ChainMenu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.naturalness_prior, DEFAULT_NATURALNESS_PRIOR);
        assert!(menu.order_tips.is_empty());
        assert!(!menu.items[0].source_verified);
        assert!(menu.check().is_ok());
    }

    #[test]
    fn test_prior_out_of_range_rejected() {
        let menu = ChainMenu::new("Odd", vec![item("Ribeye", 0.0)], 1.5);
        assert!(menu.check().is_err());
    }

    #[test]
    fn test_lowest_carb_item_keeps_first_on_tie() {
        let menu = ChainMenu::new(
            "Grill",
            vec![item("Wings", 2.0), item("Steak", 0.0), item("Salmon", 0.0)],
            0.8,
        );
        assert_eq!(menu.lowest_carb_item().unwrap().name, "Steak");
    }

    #[test]
    fn test_effective_rating_defaults() {
        let mut record = RestaurantRecord::new("Diner", &[], None);
        assert_eq!(record.effective_rating(), DEFAULT_RATING);
        record.rating = Some(0.0);
        assert_eq!(record.effective_rating(), DEFAULT_RATING);
        record.rating = Some(3.2);
        assert_eq!(record.effective_rating(), 3.2);
    }

    #[test]
    fn test_record_accepts_types_alias() {
        let record: RestaurantRecord =
            serde_json::from_str(r#"{ "name": "Ember", "types": ["steak_house"], "rating": 4.6 }"#)
                .unwrap();
        assert_eq!(record.cuisine_types, vec!["steak_house".to_string()]);
    }
}
