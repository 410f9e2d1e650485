// KetoScout batch entry point
// Reads restaurant records as JSON, prints ranked keto scores as JSON.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use ketoscout_core::config::AppConfig;
use ketoscout_core::database;
use ketoscout_core::logging::init_tracing;
use ketoscout_core::reviews::{suggestions_for, ReviewAnalysis, ReviewAnalyzer};
use ketoscout_core::scoring::{rank_restaurants, ChainRegistry, MenuCatalog, ScoreRouter};
use ketoscout_core::{GeoPoint, RestaurantRecord};

/// Batch input: either a bare array of records or an object with a search origin.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchInput {
    Records(Vec<RestaurantRecord>),
    Search {
        origin: Option<GeoPoint>,
        restaurants: Vec<RestaurantRecord>,
    },
}

#[derive(Debug, Serialize)]
struct BatchOutputEntry {
    #[serde(flatten)]
    ranked: ketoscout_core::scoring::RankedRestaurant,
    review_analysis: Option<ReviewAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keto_suggestions: Option<Vec<String>>,
}

fn read_input(path: Option<PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format)?;

    let catalog = match MenuCatalog::load(&config.chain_menus_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(
                "No chain menus loaded from {:?} ({}); every restaurant will be scored heuristically",
                config.chain_menus_path, e
            );
            MenuCatalog::new()
        }
    };

    let router = ScoreRouter::new(Arc::new(ChainRegistry::builtin()), Arc::new(catalog));
    let analyzer = ReviewAnalyzer::new(router.clone());

    let pool = match &config.database_url {
        Some(url) => Some(database::init_db(url).await?),
        None => None,
    };

    let raw = read_input(std::env::args().nth(1).map(PathBuf::from))?;
    let (origin, records) = match serde_json::from_str::<BatchInput>(&raw)
        .context("parsing restaurant records")?
    {
        BatchInput::Records(records) => (None, records),
        BatchInput::Search {
            origin,
            restaurants,
        } => (origin, restaurants),
    };
    info!("Scoring {} restaurants", records.len());

    let mut analyses = Vec::with_capacity(records.len());
    for record in &records {
        let analysis = analyzer.analyze(record);
        if let (Some(pool), Some(id), Some(a)) = (&pool, &record.id, &analysis) {
            database::upsert_restaurant_signals(
                pool,
                id,
                &a.signals,
                a.keto_confidence,
                Some(&a.summary),
            )
            .await?;
        }
        analyses.push(analysis);
    }

    let scores = router.score_all(&records);
    let ranked = rank_restaurants(records.into_iter().zip(scores).collect(), origin);

    let output: Vec<BatchOutputEntry> = ranked
        .into_iter()
        .map(|entry| {
            let review_analysis = analyses
                .get_mut(entry.input_index)
                .and_then(Option::take);
            let keto_suggestions = suggestions_for(&entry.score);
            BatchOutputEntry {
                ranked: entry,
                review_analysis,
                keto_suggestions,
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
