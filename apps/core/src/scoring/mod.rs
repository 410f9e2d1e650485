//! # Scoring Module
//!
//! Keto scoring for restaurants.
//!
//! ## Components
//! - `chains`: ordered chain registry and name detection
//! - `catalog`: curated chain menus loaded at startup
//! - `chain_scorer`: score from a verified chain menu
//! - `heuristic`: score from name keywords, type tags and rating
//! - `classify`: cuisine, price tier and dining options
//! - `router`: picks the scorer for each restaurant
//! - `ranking`: best-first ordering with distance tie-breaks

pub mod catalog;
pub mod chain_scorer;
pub mod chains;
pub mod classify;
pub mod heuristic;
pub mod ranking;
pub mod router;

pub use catalog::MenuCatalog;
pub use chain_scorer::{menu_stats, score_chain_menu, MenuStats};
pub use chains::ChainRegistry;
pub use classify::{classify_cuisine, dining_options, price_level};
pub use heuristic::{is_high_carb_venue, score_heuristic};
pub use ranking::{haversine_miles, rank_restaurants, RankedRestaurant};
pub use router::ScoreRouter;
