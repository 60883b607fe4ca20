use axum::{routing::post, Json, Router};
use serde::Serialize;

use super::{plumages, speeds, Bird, Plumage};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlumageView {
    pub name: String,
    pub plumage: Plumage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedView {
    pub name: String,
    pub air_speed_velocity: Option<f64>,
}

/// Router exposing bulk plumage and air-speed lookups.
pub fn species_router() -> Router {
    Router::new()
        .route("/api/v1/birds/plumage", post(plumage_handler))
        .route("/api/v1/birds/speed", post(speed_handler))
}

pub(crate) async fn plumage_handler(Json(birds): Json<Vec<Bird>>) -> Json<Vec<PlumageView>> {
    Json(
        plumages(&birds)
            .into_iter()
            .map(|(name, plumage)| PlumageView { name, plumage })
            .collect(),
    )
}

pub(crate) async fn speed_handler(Json(birds): Json<Vec<Bird>>) -> Json<Vec<SpeedView>> {
    Json(
        speeds(&birds)
            .into_iter()
            .map(|(name, air_speed_velocity)| SpeedView {
                name,
                air_speed_velocity,
            })
            .collect(),
    )
}
