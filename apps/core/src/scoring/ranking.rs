//! Ranking of scored restaurants by keto score and distance.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{GeoPoint, RestaurantRecord, ScoreResult};

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Width of the score band inside which distance decides the order.
const SCORE_BAND: f64 = 0.1;

/// Great-circle distance in miles, rounded to one decimal.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    (EARTH_RADIUS_MILES * c * 10.0).round() / 10.0
}

/// A restaurant with its score and, when known, its distance from the searcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRestaurant {
    pub restaurant: RestaurantRecord,
    pub score: ScoreResult,
    pub distance_miles: Option<f64>,
    /// Position of this restaurant in the input batch.
    #[serde(skip)]
    pub input_index: usize,
}

fn score_band(score: f64) -> i64 {
    (score / SCORE_BAND).floor() as i64
}

fn compare(a: &RankedRestaurant, b: &RankedRestaurant) -> Ordering {
    let by_band = score_band(b.score.keto_score).cmp(&score_band(a.score.keto_score));
    let by_distance = match (a.distance_miles, b.distance_miles) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_band
        .then(by_distance)
        .then_with(|| b.score.keto_score.total_cmp(&a.score.keto_score))
}

/// Attach distances from `origin` and sort best-first.
///
/// Higher 0.1-wide score bands come first; inside a band nearer restaurants
/// come first, then higher raw scores. Restaurants without a location sort
/// after located ones in the same band.
pub fn rank_restaurants(
    scored: Vec<(RestaurantRecord, ScoreResult)>,
    origin: Option<GeoPoint>,
) -> Vec<RankedRestaurant> {
    let mut ranked: Vec<RankedRestaurant> = scored
        .into_iter()
        .enumerate()
        .map(|(input_index, (restaurant, score))| {
            let distance_miles = origin
                .zip(restaurant.location)
                .map(|(from, to)| haversine_miles(from, to));
            RankedRestaurant {
                restaurant,
                score,
                distance_miles,
                input_index,
            }
        })
        .collect();

    ranked.sort_by(compare);
    ranked
}
