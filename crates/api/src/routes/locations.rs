//! Location directory endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use booking::RoutingService;
use serde::Serialize;
use shipment_store::{LocationRepository, ShipmentRepository};

use crate::error::ApiError;
use crate::routes::shipments::AppState;

#[derive(Serialize)]
pub struct LocationResponse {
    pub unlocode: String,
    pub name: String,
}

/// GET /locations — list the known locations.
#[tracing::instrument(skip(state))]
pub async fn list<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
) -> Result<Json<Vec<LocationResponse>>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let locations = state
        .location_store
        .find_all()
        .await
        .map_err(booking::BookingError::from)?;

    let response = locations
        .into_iter()
        .map(|location| LocationResponse {
            unlocode: location.unlocode().to_string(),
            name: location.name().to_string(),
        })
        .collect();

    Ok(Json(response))
}
