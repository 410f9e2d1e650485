//! KetoScout core: estimates how keto-friendly a restaurant is.
//!
//! Known chains are scored from curated menus; everything else is scored from
//! name keywords, type tags and rating. Review text adds an independent
//! keyword-based confidence estimate.

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod reviews;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub use models::{
    ChainEntry, ChainMenu, DiningOption, GeoPoint, MenuItem, RestaurantRecord, ScoreResult,
    ScoreSource,
};
