use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::bulk::{bulk_breakdowns, bulk_ratings, RatingRequest};
use super::domain::{Grade, HistoryEntry, Voyage};
use super::rating::{select_rating, RatingBreakdown};
use crate::config::RatingConfig;

/// Single voyage payload; the voyage fields sit at the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingPayload {
    #[serde(flatten)]
    pub voyage: Voyage,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkRatingPayload {
    #[serde(default)]
    pub breakdown: bool,
    pub voyages: Vec<RatingRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedRatingView {
    pub name: String,
    pub grade: Grade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<RatingBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkRatingResponse {
    pub ratings: Vec<NamedRatingView>,
}

/// Router builder exposing single and bulk voyage rating.
pub fn rating_router(config: RatingConfig) -> Router {
    Router::new()
        .route("/api/v1/rating", post(rating_handler))
        .route("/api/v1/ratings", post(bulk_rating_handler))
        .with_state(config)
}

pub(crate) async fn rating_handler(
    State(config): State<RatingConfig>,
    Json(payload): Json<RatingPayload>,
) -> Json<RatingBreakdown> {
    let RatingPayload {
        mut voyage,
        mut history,
    } = payload;

    if config.normalize_zones {
        voyage.normalize_zone();
        history.iter_mut().for_each(HistoryEntry::normalize_zone);
    }

    Json(select_rating(&voyage, &history).breakdown())
}

pub(crate) async fn bulk_rating_handler(
    State(config): State<RatingConfig>,
    Json(payload): Json<BulkRatingPayload>,
) -> Json<BulkRatingResponse> {
    let BulkRatingPayload {
        breakdown,
        mut voyages,
    } = payload;

    if config.normalize_zones {
        voyages.iter_mut().for_each(RatingRequest::normalize_zones);
    }

    let ratings = if breakdown {
        bulk_breakdowns(&voyages)
            .into_iter()
            .map(|(name, snapshot)| NamedRatingView {
                name,
                grade: snapshot.grade,
                breakdown: Some(snapshot),
            })
            .collect()
    } else {
        bulk_ratings(&voyages)
            .into_iter()
            .map(|(name, grade)| NamedRatingView {
                name,
                grade,
                breakdown: None,
            })
            .collect()
    };

    Json(BulkRatingResponse { ratings })
}
