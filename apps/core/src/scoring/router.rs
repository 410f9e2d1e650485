//! Score Router - picks the chain or heuristic scorer for each restaurant.
//!
//! Verified chain menus win. A chain whose menu is missing, empty or unusable
//! is scored heuristically but still reported as a chain.

use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::MenuCatalog;
use super::chain_scorer::score_chain_menu;
use super::chains::ChainRegistry;
use super::classify::{classify_cuisine, dining_options, price_level};
use super::heuristic::score_heuristic;
use crate::models::{ChainEntry, ChainMenu, RestaurantRecord, ScoreResult, ScoreSource};

/// Routes restaurants to a scorer. Holds only read-only startup data, so it is
/// cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct ScoreRouter {
    registry: Arc<ChainRegistry>,
    catalog: Arc<MenuCatalog>,
}

impl ScoreRouter {
    pub fn new(registry: Arc<ChainRegistry>, catalog: Arc<MenuCatalog>) -> Self {
        Self { registry, catalog }
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn detect_chain(&self, name: &str) -> Option<&ChainEntry> {
        self.registry.detect_chain(name)
    }

    /// Matched chain together with its non-empty menu, if both exist.
    pub fn verified_menu(&self, name: &str) -> Option<(&ChainEntry, &ChainMenu)> {
        let chain = self.detect_chain(name)?;
        let menu = self.catalog.scorable_menu(chain)?;
        Some((chain, menu))
    }

    pub fn score(&self, record: &RestaurantRecord) -> ScoreResult {
        let chain = self.detect_chain(&record.name);

        let chain_score = chain.and_then(|entry| {
            let menu = self.catalog.scorable_menu(entry)?;
            match score_chain_menu(menu) {
                Ok(score) => Some(score),
                Err(e) => {
                    warn!(
                        "Menu for {} unusable, falling back to heuristic: {}",
                        entry.display_name, e
                    );
                    None
                }
            }
        });

        let (keto_score, source) = match chain_score {
            Some(score) => (score, ScoreSource::VerifiedChain),
            None => (
                score_heuristic(&record.name, &record.cuisine_types, record.effective_rating()),
                ScoreSource::Heuristic,
            ),
        };

        debug!(
            "Scored '{}': {:.2} via {:?} (chain: {})",
            record.name,
            keto_score,
            source,
            chain.map(|c| c.display_name.as_str()).unwrap_or("none")
        );

        ScoreResult {
            keto_score,
            cuisine: classify_cuisine(&record.cuisine_types, &record.name),
            is_chain: chain.is_some(),
            chain_name: chain.map(|c| c.display_name.clone()),
            source,
            price_level: price_level(record.price_level.as_deref()),
            dining_options: dining_options(&record.cuisine_types, &record.name),
        }
    }

    /// Score a batch; results keep input order.
    pub fn score_all(&self, records: &[RestaurantRecord]) -> Vec<ScoreResult> {
        records.iter().map(|r| self.score(r)).collect()
    }
}
