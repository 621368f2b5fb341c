//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Serialize;

use crate::domain::{BikeType, Position};
use crate::finder::{self, BikeQuery, DockQuery};

use super::dto::{FindBikeParams, FindDockParams, render_bike_result, render_dock_result};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools/find_nearest_bike", get(find_nearest_bike))
        .route(
            "/tools/find_nearest_dock_spaces",
            get(find_nearest_dock_spaces),
        )
        .with_state(state)
}

/// Health check body for load balancers and orchestrators.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "baywheels-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Find the nearest location with enough available bikes.
///
/// Always answers 200 with a plain-text body; failures render as
/// "Error ..." text rather than protocol-level faults.
async fn find_nearest_bike(
    State(state): State<AppState>,
    Query(params): Query<FindBikeParams>,
) -> String {
    let query = BikeQuery {
        position: Position::new(params.latitude, params.longitude),
        count: params.count,
        // An unrecognized label means "any type", not an error.
        bike_type: params.bike_type.as_deref().and_then(BikeType::from_label),
    };

    let result = finder::find_nearest_bike(&state.gbfs, &query).await;
    render_bike_result(result)
}

/// Find the nearest dock with enough free return spaces.
async fn find_nearest_dock_spaces(
    State(state): State<AppState>,
    Query(params): Query<FindDockParams>,
) -> String {
    let query = DockQuery {
        position: Position::new(params.latitude, params.longitude),
        count: params.count,
    };

    let result = finder::find_nearest_dock_spaces(&state.gbfs, &query).await;
    render_dock_result(result)
}
