//! Menu Catalog.
//!
//! Read-only store of curated chain menus, keyed by menu lookup key.
//! Loaded once at startup from JSON; malformed entries are dropped so the
//! affected chains fall back to heuristic scoring.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{ChainEntry, ChainMenu};

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    menus: HashMap<String, ChainMenu>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a menu. Used to build fake catalogs.
    pub fn insert(&mut self, menu_key: &str, menu: ChainMenu) -> &mut Self {
        self.menus.insert(menu_key.to_string(), menu);
        self
    }

    /// Parse a catalog document: a JSON object of menu key to menu.
    ///
    /// Keys starting with `_` are metadata. Entries that fail to parse or
    /// validate are skipped with a warning.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let document: HashMap<String, Value> = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for (key, raw) in document {
            if key.starts_with('_') {
                continue;
            }
            let menu = match serde_json::from_value::<ChainMenu>(raw) {
                Ok(menu) => menu,
                Err(e) => {
                    warn!("Skipping malformed menu '{}': {}", key, e);
                    continue;
                }
            };
            if let Err(e) = menu.check() {
                warn!("Skipping invalid menu '{}': {}", key, e);
                continue;
            }
            catalog.menus.insert(key, menu);
        }

        Ok(catalog)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Chain menu data loaded from {:?}: {} menus",
            path,
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn get(&self, menu_key: &str) -> Option<&ChainMenu> {
        self.menus.get(menu_key)
    }

    /// Menu for a chain, only if it has at least one item and passes validation.
    ///
    /// Menus added through `insert` are not validated up front, so they are checked here.
    pub fn scorable_menu(&self, chain: &ChainEntry) -> Option<&ChainMenu> {
        let menu = chain
            .menu_key
            .as_deref()
            .and_then(|key| self.get(key))
            .filter(|menu| !menu.items.is_empty())?;

        match menu.check() {
            Ok(()) => Some(menu),
            Err(e) => {
                warn!("Menu for {} unusable: {}", chain.display_name, e);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    const SAMPLE: &str = r#"{
        "_comment": "metadata is ignored",
        "outback": {
            "chainName": "Outback Steakhouse",
            "ketoNaturalness": 0.95,
            "orderTips": ["Swap the potato for steamed broccoli"],
            "combos": [
                { "name": "Victoria's Filet", "carbs": 0, "protein": 48, "fat": 18, "calories": 370, "verified": true }
            ]
        },
        "broken": { "chainName": "Broken", "combos": [{ "name": "Mystery", "carbs": "lots" }] },
        "negative": { "chainName": "Negative", "combos": [{ "name": "Ghost", "carbs": -4 }] },
        "empty": { "chainName": "Empty", "combos": [] }
    }"#;

    #[test]
    fn test_parse_skips_bad_entries() {
        let catalog = MenuCatalog::from_json_str(SAMPLE).unwrap();
        assert!(catalog.get("outback").is_some());
        assert!(catalog.get("broken").is_none());
        assert!(catalog.get("negative").is_none());
        assert!(catalog.get("_comment").is_none());
        assert!(catalog.get("empty").is_some());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_scorable_menu_requires_items() {
        let catalog = MenuCatalog::from_json_str(SAMPLE).unwrap();
        let outback = ChainEntry::new("outback", "Outback Steakhouse", "outback", &[]);
        let empty = ChainEntry::new("empty", "Empty", "empty", &[]);
        let missing = ChainEntry::new("nowhere", "Nowhere", "nowhere", &[]);

        assert!(catalog.scorable_menu(&outback).is_some());
        assert!(catalog.scorable_menu(&empty).is_none());
        assert!(catalog.scorable_menu(&missing).is_none());
    }

    #[test]
    fn test_scorable_menu_rejects_inserted_invalid_menu() {
        let mut catalog = MenuCatalog::new();
        let drumstick = MenuItem {
            name: "Drumstick".to_string(),
            carbs_grams: f64::NAN,
            protein_grams: 1.0,
            fat_grams: 8.0,
            calories: 120.0,
            order_as_instructions: None,
            source_verified: false,
        };
        catalog.insert("kfc", ChainMenu::new("KFC", vec![drumstick], 0.6));

        let kfc = ChainEntry::new("kfc", "KFC", "kfc", &[]);
        assert!(catalog.scorable_menu(&kfc).is_none());
    }

    #[test]
    fn test_not_an_object_is_an_error() {
        assert!(MenuCatalog::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain-menus.json");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = MenuCatalog::load(&path).unwrap();
        assert_eq!(catalog.get("outback").unwrap().naturalness_prior, 0.95);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MenuCatalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
