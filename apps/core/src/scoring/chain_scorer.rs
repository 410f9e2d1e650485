//! Chain Menu Scoring.
//!
//! Scores a chain from its verified menu. The naturalness prior carries most of
//! the weight; item-level statistics adjust it.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::ChainMenu;

/// Markers showing an item only works when modified.
const MODIFICATION_MARKERS: &[&str] = &[
    "no bun",
    "bunless",
    "no bread",
    "no biscuit",
    "no croissant",
    "no muffin",
    "no tortilla",
    "no rice",
    "protein style",
    "lettuce wrap",
];

const LOW_CARB_THRESHOLD_GRAMS: f64 = 5.0;
const AVG_CARBS_CEILING_GRAMS: f64 = 12.0;

const BASE_SCORE: f64 = 0.35;
const NATURALNESS_WEIGHT: f64 = 0.35;
const CUSTOMIZATION_PENALTY: f64 = 0.15;
const LOW_CARB_WEIGHT: f64 = 0.15;
const AVG_CARBS_WEIGHT: f64 = 0.08;
const ZERO_CARB_BONUS: f64 = 0.02;

pub const CHAIN_SCORE_MIN: f64 = 0.30;
pub const CHAIN_SCORE_MAX: f64 = 0.95;

/// Item-level statistics feeding the chain score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuStats {
    pub item_count: usize,
    pub low_carb_count: usize,
    pub low_carb_ratio: f64,
    pub avg_carbs: f64,
    pub has_zero_carb: bool,
    pub customization_ratio: f64,
}

impl MenuStats {
    /// Callers must pass a non-empty, validated menu.
    fn compute(menu: &ChainMenu) -> Self {
        let items = &menu.items;
        let count = items.len() as f64;

        let low_carb_count = items
            .iter()
            .filter(|i| i.carbs_grams <= LOW_CARB_THRESHOLD_GRAMS)
            .count();
        let avg_carbs = items.iter().map(|i| i.carbs_grams).sum::<f64>() / count;
        let has_zero_carb = items.iter().any(|i| i.carbs_grams == 0.0);
        let modified = items
            .iter()
            .filter(|i| {
                let name = i.name.to_lowercase();
                let order_as = i
                    .order_as_instructions
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase();
                MODIFICATION_MARKERS
                    .iter()
                    .any(|m| name.contains(m) || order_as.contains(m))
            })
            .count();

        Self {
            item_count: items.len(),
            low_carb_count,
            low_carb_ratio: low_carb_count as f64 / count,
            avg_carbs,
            has_zero_carb,
            customization_ratio: modified as f64 / count,
        }
    }
}

/// Summarize a menu. Fails on empty or invalid menus.
pub fn menu_stats(menu: &ChainMenu) -> Result<MenuStats, AppError> {
    if menu.items.is_empty() {
        return Err(AppError::Validation(format!(
            "cannot score '{}': menu has no items",
            menu.chain_name
        )));
    }
    menu.check()?;
    Ok(MenuStats::compute(menu))
}

/// Keto score for a chain, rounded to two decimals and clamped to [0.30, 0.95].
pub fn score_chain_menu(menu: &ChainMenu) -> Result<f64, AppError> {
    let stats = menu_stats(menu)?;

    let mut score = BASE_SCORE + menu.naturalness_prior * NATURALNESS_WEIGHT;
    score -= stats.customization_ratio * CUSTOMIZATION_PENALTY;
    score += stats.low_carb_ratio * LOW_CARB_WEIGHT;
    score += ((AVG_CARBS_CEILING_GRAMS - stats.avg_carbs) / AVG_CARBS_CEILING_GRAMS).max(0.0)
        * AVG_CARBS_WEIGHT;
    if stats.has_zero_carb {
        score += ZERO_CARB_BONUS;
    }

    let rounded = (score * 100.0).round() / 100.0;
    Ok(rounded.clamp(CHAIN_SCORE_MIN, CHAIN_SCORE_MAX))
}
